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
use crate::err::MathError;
use num_traits::Float;

/// How [round_digitsf] and [round_digits] settle the scaled value
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MidpointRounding {
    /// Nearest, halfway cases to the even neighbour
    #[default]
    ToEven,
    /// Nearest, halfway cases away from zero
    AwayFromZero,
    ToZero,
    ToNegativeInfinity,
    ToPositiveInfinity,
}

/// Rounds to the nearest integer, ties to even.
///
/// Works on the bit pattern: adds half of the last integral bit and clears the
/// fraction, dropping that bit again when the fraction was exactly one half.
/// The sign of zero results follows `x`.
#[inline]
pub const fn roundf(x: f32) -> f32 {
    let mut bits = x.to_bits();
    let exponent = (bits >> 23) & 0xff;

    if exponent <= 0x7e {
        if (bits << 1) == 0 {
            return x;
        }
        // (0.5, 1) goes to one, [0, 0.5] goes to zero
        let result: f32 = if exponent == 0x7e && (bits & 0x007f_ffff) != 0 {
            1.0
        } else {
            0.0
        };
        return f32::from_bits(result.to_bits() | (bits & 0x8000_0000));
    }

    // 2^23 and above, infinities and NaN have no fraction
    if exponent >= 0x96 {
        return x;
    }

    let last_bit_mask = 1u32 << (0x96 - exponent);
    let round_bits_mask = last_bit_mask - 1;

    bits += last_bit_mask >> 1;
    if (bits & round_bits_mask) == 0 {
        bits &= !last_bit_mask;
    } else {
        bits &= !round_bits_mask;
    }
    f32::from_bits(bits)
}

/// Rounds to the nearest integer, ties to even, see [roundf]
#[inline]
pub const fn round(x: f64) -> f64 {
    let mut bits = x.to_bits();
    let exponent = (bits >> 52) & 0x7ff;

    if exponent <= 0x3fe {
        if (bits << 1) == 0 {
            return x;
        }
        let result: f64 = if exponent == 0x3fe && (bits & 0x000f_ffff_ffff_ffff) != 0 {
            1.0
        } else {
            0.0
        };
        return f64::from_bits(result.to_bits() | (bits & 0x8000_0000_0000_0000));
    }

    if exponent >= 0x433 {
        return x;
    }

    let last_bit_mask = 1u64 << (0x433 - exponent);
    let round_bits_mask = last_bit_mask - 1;

    bits += last_bit_mask >> 1;
    if (bits & round_bits_mask) == 0 {
        bits &= !last_bit_mask;
    } else {
        bits &= !round_bits_mask;
    }
    f64::from_bits(bits)
}

/// Drops the fractional part, keeping the sign of `x`
#[inline]
pub const fn truncf(x: f32) -> f32 {
    let bits = x.to_bits();
    let exponent = (bits >> 23) & 0xff;
    if exponent >= 0x96 {
        return x;
    }
    if exponent < 0x7f {
        return f32::from_bits(bits & 0x8000_0000);
    }
    let fraction_mask = (1u32 << (0x96 - exponent)) - 1;
    f32::from_bits(bits & !fraction_mask)
}

/// Drops the fractional part, keeping the sign of `x`
#[inline]
pub const fn trunc(x: f64) -> f64 {
    let bits = x.to_bits();
    let exponent = (bits >> 52) & 0x7ff;
    if exponent >= 0x433 {
        return x;
    }
    if exponent < 0x3ff {
        return f64::from_bits(bits & 0x8000_0000_0000_0000);
    }
    let fraction_mask = (1u64 << (0x433 - exponent)) - 1;
    f64::from_bits(bits & !fraction_mask)
}

/// Ties-to-even rounding for the generic helpers, `num_traits::Float` has none
pub(crate) trait RoundTiesEven: Float {
    fn round_even(self) -> Self;
}

impl RoundTiesEven for f32 {
    #[inline]
    fn round_even(self) -> f32 {
        roundf(self)
    }
}

impl RoundTiesEven for f64 {
    #[inline]
    fn round_even(self) -> f64 {
        round(self)
    }
}

const POWERS_OF_TEN_F32: [f32; 7] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];
const POWERS_OF_TEN_F64: [f64; 16] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
];

// Past these magnitudes every representable value is already an integer at any digit count
const ROUND_LIMIT_F32: f32 = 1e8;
const ROUND_LIMIT_F64: f64 = 1e16;

fn round_digits_impl<T: RoundTiesEven>(
    x: T,
    digits: u32,
    mode: MidpointRounding,
    powers: &[T],
    limit: T,
) -> Result<T, MathError> {
    let Some(&power10) = powers.get(digits as usize) else {
        return Err(MathError::RoundingDigitsOutOfRange {
            digits,
            max: powers.len() as u32 - 1,
        });
    };

    // NaN and values past the limit come back untouched
    if x.is_nan() || x.abs() >= limit {
        return Ok(x);
    }

    let scaled = x * power10;
    let rounded = match mode {
        MidpointRounding::ToEven => scaled.round_even(),
        MidpointRounding::AwayFromZero => {
            let integral = scaled.trunc();
            let fraction = scaled - integral;
            let half = T::one() / (T::one() + T::one());
            if fraction.abs() >= half {
                integral + fraction.signum()
            } else {
                integral
            }
        }
        MidpointRounding::ToZero => scaled.trunc(),
        MidpointRounding::ToNegativeInfinity => scaled.floor(),
        MidpointRounding::ToPositiveInfinity => scaled.ceil(),
    };
    Ok(rounded / power10)
}

/// Rounds `x` to `digits` decimal places using `mode`.
///
/// `digits` goes up to 6. NaN, infinities and anything at or above `1e8` in
/// magnitude is returned unchanged.
///
/// # Errors
///
/// [MathError::RoundingDigitsOutOfRange] when `digits` is above 6.
pub fn round_digitsf(x: f32, digits: u32, mode: MidpointRounding) -> Result<f32, MathError> {
    round_digits_impl(x, digits, mode, &POWERS_OF_TEN_F32, ROUND_LIMIT_F32)
}

/// Rounds `x` to `digits` decimal places using `mode`.
///
/// `digits` goes up to 15. NaN, infinities and anything at or above `1e16` in
/// magnitude is returned unchanged.
///
/// # Errors
///
/// [MathError::RoundingDigitsOutOfRange] when `digits` is above 15.
pub fn round_digits(x: f64, digits: u32, mode: MidpointRounding) -> Result<f64, MathError> {
    round_digits_impl(x, digits, mode, &POWERS_OF_TEN_F64, ROUND_LIMIT_F64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundf() {
        assert_eq!(roundf(0.5), 0.0);
        assert_eq!(roundf(1.5), 2.0);
        assert_eq!(roundf(2.5), 2.0);
        assert_eq!(roundf(-2.5), -2.0);
        assert_eq!(roundf(3.7), 4.0);
        assert_eq!(roundf(-3.2), -3.0);
        assert_eq!(roundf(0.500_000_06), 1.0);
        assert_eq!(roundf(-0.3).to_bits(), (-0f32).to_bits());
        assert_eq!(roundf(-0.7), -1.0);
        assert_eq!(roundf(8_388_607.5), 8_388_608.0);
        assert_eq!(roundf(16_777_215.0), 16_777_215.0);
        assert_eq!(roundf(f32::NEG_INFINITY), f32::NEG_INFINITY);
        let payload = f32::from_bits(0x7fc0_0007);
        assert_eq!(roundf(payload).to_bits(), payload.to_bits());
    }

    #[test]
    fn test_round() {
        assert_eq!(round(0.5), 0.0);
        assert_eq!(round(2.5), 2.0);
        assert_eq!(round(3.5), 4.0);
        assert_eq!(round(-4.5), -4.0);
        assert_eq!(round(0.49999999999999994), 0.0);
        assert_eq!(round(-0.0).to_bits(), (-0f64).to_bits());
        assert_eq!(round(4_503_599_627_370_495.5), 4_503_599_627_370_496.0);
        assert_eq!(round(1e300), 1e300);
        assert!(round(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_matches_std_ties_even() {
        for i in -4000..4000 {
            let x = i as f32 * 0.25;
            assert_eq!(roundf(x), x.round_ties_even(), "x = {x}");
            let y = i as f64 * 0.125;
            assert_eq!(round(y), y.round_ties_even(), "y = {y}");
        }
    }

    #[test]
    fn test_trunc() {
        assert_eq!(truncf(2.7), 2.0);
        assert_eq!(truncf(-2.7), -2.0);
        assert_eq!(truncf(-0.3).to_bits(), (-0f32).to_bits());
        assert_eq!(truncf(1e30), 1e30);
        assert_eq!(truncf(f32::INFINITY), f32::INFINITY);
        assert!(truncf(f32::NAN).is_nan());
        assert_eq!(trunc(123.999), 123.0);
        assert_eq!(trunc(-1.5), -1.0);
        assert_eq!(trunc(0.9).to_bits(), 0f64.to_bits());
        assert_eq!(trunc(-4_503_599_627_370_495.5), -4_503_599_627_370_495.0);
    }

    #[test]
    fn test_round_digitsf_modes() {
        assert_eq!(round_digitsf(1.25, 1, MidpointRounding::ToEven), Ok(1.2));
        assert_eq!(round_digitsf(1.25, 1, MidpointRounding::AwayFromZero), Ok(1.3));
        assert_eq!(round_digitsf(-1.25, 1, MidpointRounding::AwayFromZero), Ok(-1.3));
        assert_eq!(round_digitsf(-1.27, 1, MidpointRounding::ToZero), Ok(-1.2));
        assert_eq!(round_digitsf(1.27, 1, MidpointRounding::ToNegativeInfinity), Ok(1.2));
        assert_eq!(round_digitsf(1.21, 1, MidpointRounding::ToPositiveInfinity), Ok(1.3));
        assert_eq!(round_digitsf(2.5, 0, MidpointRounding::default()), Ok(2.0));
        assert_eq!(round_digitsf(1e9, 3, MidpointRounding::ToZero), Ok(1e9));
        assert!(round_digitsf(f32::NAN, 2, MidpointRounding::ToEven).unwrap().is_nan());
    }

    #[test]
    fn test_round_digits_out_of_range() {
        assert_eq!(
            round_digitsf(1.0, 7, MidpointRounding::ToEven),
            Err(MathError::RoundingDigitsOutOfRange { digits: 7, max: 6 })
        );
        assert_eq!(
            round_digits(1.0, 16, MidpointRounding::ToEven),
            Err(MathError::RoundingDigitsOutOfRange { digits: 16, max: 15 })
        );
        assert!(round_digits(1.0, 15, MidpointRounding::ToEven).is_ok());
    }

    #[test]
    fn test_round_digits_f64() {
        assert_eq!(round_digits(2.5, 0, MidpointRounding::ToEven), Ok(2.0));
        assert_eq!(round_digits(2.5, 0, MidpointRounding::AwayFromZero), Ok(3.0));
        assert_eq!(round_digits(0.125, 2, MidpointRounding::ToEven), Ok(0.12));
        assert_eq!(round_digits(0.125, 2, MidpointRounding::AwayFromZero), Ok(0.13));
        assert_eq!(round_digits(-7.77, 1, MidpointRounding::ToPositiveInfinity), Ok(-7.7));
        assert_eq!(round_digits(f64::INFINITY, 2, MidpointRounding::ToZero), Ok(f64::INFINITY));
    }
}
