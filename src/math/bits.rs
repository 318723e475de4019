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
/// Raw IEEE 754 binary64 fields of a value.
///
/// A transient view: constructed from a single `f64`, taken apart, and
/// reassembled with [`FloatBits::to_f64`]. Conversion in both directions is a
/// bit reinterpretation, so no value is ever rounded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FloatBits {
    /// Sign bit
    pub negative: bool,
    /// Biased exponent field, `0..=0x7ff`
    pub biased_exponent: u32,
    /// Stored 52-bit significand, without the implicit leading one
    pub significand: u64,
}

impl FloatBits {
    pub const EXPONENT_BIAS: i32 = 1023;
    pub const SIGNIFICAND_BITS: u32 = 52;
    pub const SIGNIFICAND_MASK: u64 = (1 << 52) - 1;

    #[inline]
    pub const fn of(x: f64) -> FloatBits {
        let t = x.to_bits();
        FloatBits {
            negative: (t >> 63) != 0,
            biased_exponent: ((t >> 52) & 0x7ff) as u32,
            significand: t & Self::SIGNIFICAND_MASK,
        }
    }

    #[inline]
    pub const fn to_f64(self) -> f64 {
        let sign = if self.negative { 1u64 << 63 } else { 0 };
        f64::from_bits(
            sign | ((self.biased_exponent as u64 & 0x7ff) << 52)
                | (self.significand & Self::SIGNIFICAND_MASK),
        )
    }

    /// Unbiased binary exponent. Meaningful for normal values only.
    #[inline]
    pub const fn exponent(self) -> i32 {
        self.biased_exponent as i32 - Self::EXPONENT_BIAS
    }

    /// 53-bit significand with the implicit leading one restored.
    #[inline]
    pub const fn full_significand(self) -> u64 {
        self.significand | (1 << Self::SIGNIFICAND_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_bits_fields() {
        let one = FloatBits::of(1.0);
        assert!(!one.negative);
        assert_eq!(one.biased_exponent, 1023);
        assert_eq!(one.exponent(), 0);
        assert_eq!(one.significand, 0);
        assert_eq!(one.full_significand(), 1 << 52);

        let v = FloatBits::of(-1.5);
        assert!(v.negative);
        assert_eq!(v.exponent(), 0);
        assert_eq!(v.significand, 1 << 51);

        assert_eq!(FloatBits::of(16_000_000.0).exponent(), 23);
    }

    #[test]
    fn test_float_bits_reassembles_exactly() {
        for x in [
            0.0,
            -0.0,
            f64::MIN_POSITIVE,
            5e-324,
            std::f64::consts::PI,
            -1e300,
            f64::INFINITY,
        ] {
            assert_eq!(FloatBits::of(x).to_f64().to_bits(), x.to_bits());
        }
        let nan = f64::from_bits(0x7ff8_0000_dead_beef);
        assert_eq!(FloatBits::of(nan).to_f64().to_bits(), nan.to_bits());
    }
}
