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
/// Next representable value towards positive infinity
///
/// `-∞` steps to `f64::MIN`, `+∞` and NaN are returned unchanged,
/// `-0.0` steps to the smallest positive subnormal.
#[inline]
pub const fn bit_increment(x: f64) -> f64 {
    let bits = x.to_bits() as i64;
    if ((bits >> 32) & 0x7ff00000) >= 0x7ff00000 {
        return if x.to_bits() == f64::NEG_INFINITY.to_bits() {
            f64::MIN
        } else {
            x
        };
    }
    if x.to_bits() == (-0f64).to_bits() {
        return f64::from_bits(1);
    }
    f64::from_bits((bits + if bits < 0 { -1 } else { 1 }) as u64)
}

/// Next representable value towards negative infinity
///
/// `+∞` steps to `f64::MAX`, `-∞` and NaN are returned unchanged,
/// `+0.0` steps to the smallest negative subnormal.
#[inline]
pub const fn bit_decrement(x: f64) -> f64 {
    let bits = x.to_bits() as i64;
    if ((bits >> 32) & 0x7ff00000) >= 0x7ff00000 {
        return if x.to_bits() == f64::INFINITY.to_bits() {
            f64::MAX
        } else {
            x
        };
    }
    if bits == 0 {
        return -f64::from_bits(1);
    }
    f64::from_bits((bits + if bits < 0 { 1 } else { -1 }) as u64)
}

/// Next representable `f32` towards positive infinity, see [bit_increment]
#[inline]
pub const fn bit_incrementf(x: f32) -> f32 {
    let bits = x.to_bits() as i32;
    if (bits & 0x7f800000) >= 0x7f800000 {
        return if x.to_bits() == f32::NEG_INFINITY.to_bits() {
            f32::MIN
        } else {
            x
        };
    }
    if x.to_bits() == (-0f32).to_bits() {
        return f32::from_bits(1);
    }
    f32::from_bits((bits + if bits < 0 { -1 } else { 1 }) as u32)
}

/// Next representable `f32` towards negative infinity, see [bit_decrement]
#[inline]
pub const fn bit_decrementf(x: f32) -> f32 {
    let bits = x.to_bits() as i32;
    if (bits & 0x7f800000) >= 0x7f800000 {
        return if x.to_bits() == f32::INFINITY.to_bits() {
            f32::MAX
        } else {
            x
        };
    }
    if bits == 0 {
        return -f32::from_bits(1);
    }
    f32::from_bits((bits + if bits < 0 { 1 } else { -1 }) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_increment() {
        assert_eq!(bit_increment(1.0), 1.0 + f64::EPSILON);
        assert_eq!(bit_increment(-1.0), -1.0 + f64::EPSILON / 2.0);
        assert_eq!(bit_increment(0.0), f64::from_bits(1));
        assert_eq!(bit_increment(-0.0), f64::from_bits(1));
        assert_eq!(bit_increment(-f64::from_bits(1)).to_bits(), (-0f64).to_bits());
        assert_eq!(bit_increment(f64::MAX), f64::INFINITY);
        assert_eq!(bit_increment(f64::NEG_INFINITY), f64::MIN);
        assert_eq!(bit_increment(f64::INFINITY), f64::INFINITY);
        assert!(bit_increment(f64::NAN).is_nan());
    }

    #[test]
    fn test_bit_decrement() {
        assert_eq!(bit_decrement(1.0), 1.0 - f64::EPSILON / 2.0);
        assert_eq!(bit_decrement(0.0), -f64::from_bits(1));
        assert_eq!(bit_decrement(f64::INFINITY), f64::MAX);
        assert_eq!(bit_decrement(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(bit_decrement(bit_increment(0.75)), 0.75);
    }

    #[test]
    fn test_bit_incrementf() {
        assert_eq!(bit_incrementf(1.0), 1.0 + f32::EPSILON);
        assert_eq!(bit_incrementf(-0.0), f32::from_bits(1));
        assert_eq!(bit_incrementf(f32::NEG_INFINITY), f32::MIN);
        assert_eq!(bit_incrementf(f32::MAX), f32::INFINITY);
        assert_eq!(bit_decrementf(1.0), 1.0 - f32::EPSILON / 2.0);
        assert_eq!(bit_decrementf(0.0), -f32::from_bits(1));
        assert_eq!(bit_decrementf(f32::INFINITY), f32::MAX);
        assert!(bit_decrementf(f32::NAN).is_nan());
        assert_eq!(bit_decrementf(bit_incrementf(-3.5)), -3.5);
    }
}
