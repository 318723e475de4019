/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
const TWO25: f32 = 3.355443200e7f32;
const TWO_M25: f32 = 2.9802322388e-8f32;
const HUGE: f32 = 1.0e30f32;
const SMALL: f32 = 1.0e-30f32;

/// Computes `x * 2^n` on the exponent field
///
/// NaN and infinities propagate, results past the range overflow to signed
/// infinity or flush to signed zero.
#[inline]
pub const fn scalebf(x: f32, n: i32) -> f32 {
    let mut x = x;
    let mut ix = x.to_bits();
    let mut k = ((ix & 0x7f800000) >> 23) as i32;
    let sign = if x.is_sign_negative() { -1f32 } else { 1f32 };
    if k == 0 {
        // +-0 or subnormal
        if (ix & 0x7fffffff) == 0 {
            return x;
        }
        x *= TWO25;
        ix = x.to_bits();
        k = ((ix & 0x7f800000) >> 23) as i32 - 25;
    }
    if k == 0xff {
        return x + x;
    }
    if n < -50000 {
        return SMALL * SMALL * sign;
    }
    if n > 50000 || k + n > 0xfe {
        return HUGE * HUGE * sign;
    }
    k += n;
    if k > 0 {
        return f32::from_bits((ix & 0x807fffff) | ((k as u32) << 23));
    }
    if k <= -25 {
        return SMALL * SMALL * sign;
    }
    k += 25;
    f32::from_bits((ix & 0x807fffff) | ((k as u32) << 23)) * TWO_M25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalebf() {
        assert_eq!(scalebf(1.0, 3), 8.0);
        assert_eq!(scalebf(-1.5, -1), -0.75);
        assert_eq!(scalebf(3.0, 0), 3.0);
        assert_eq!(scalebf(0.0, 100), 0.0);
        assert_eq!(scalebf(-0.0, 100).to_bits(), (-0f32).to_bits());
        assert_eq!(scalebf(1.0, 128), f32::INFINITY);
        assert_eq!(scalebf(-1.0, 1000), f32::NEG_INFINITY);
        assert_eq!(scalebf(1.0, -149), f32::from_bits(1));
        assert_eq!(scalebf(1.0, -200), 0.0);
        assert_eq!(scalebf(-1.0, -200).to_bits(), (-0f32).to_bits());
        assert_eq!(scalebf(f32::from_bits(1), 149), 1.0);
        assert_eq!(scalebf(f32::INFINITY, -5), f32::INFINITY);
        assert!(scalebf(f32::NAN, 2).is_nan());
        assert_eq!(scalebf(1.0, i32::MAX), f32::INFINITY);
        assert_eq!(scalebf(1.0, i32::MIN), 0.0);
    }
}
