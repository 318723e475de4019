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
/// Double precision constants for reducing by multiples of π/2.
///
/// `pi_over_two_high + pi_over_two_high_tail` and
/// `pi_over_two_high + pi_over_two_low + pi_over_two_low_tail` both split π/2.
/// `pi_over_two_high` has its low 22 significand bits cleared, so its product
/// with a region count fits a double only below 2^22. Larger counts need the
/// product as a double-double.
pub(crate) struct ReductionConstants {
    pub(crate) pi_over_two: f64,
    pub(crate) pi_over_four: f64,
    pub(crate) two_over_pi: f64,
    pub(crate) pi_over_two_high: f64,
    pub(crate) pi_over_two_high_tail: f64,
    pub(crate) pi_over_two_low: f64,
    pub(crate) pi_over_two_low_tail: f64,
}

pub(crate) const REDUCTION: ReductionConstants = ReductionConstants {
    pi_over_two: f64::from_bits(0x3ff921fb54442d18),
    pi_over_four: f64::from_bits(0x3fe921fb54442d18),
    two_over_pi: f64::from_bits(0x3fe45f306dc9c883),
    pi_over_two_high: f64::from_bits(0x3ff921fb54400000),
    pi_over_two_high_tail: f64::from_bits(0x3dd0b4611a626331),
    pi_over_two_low: f64::from_bits(0x3dd0b4611a600000),
    pi_over_two_low_tail: f64::from_bits(0x3ba3198a2e037073),
};

/// Width in bits of one [`PI_DIGITS`] chunk.
pub(crate) const PI_DIGITS_CHUNK_BITS: u32 = 36;

/// Binary expansion of 2/π in 36-bit chunks.
///
/// The first 13 bits of the fraction sit in the low bits of chunk 1, every
/// following chunk carries the next 36 bits. Chunk 0 is padding.
pub(crate) const PI_DIGITS: [u64; 13] = [
    0x0,
    0x145f,
    0x306dc9c88,
    0x2a53f84ea,
    0xfa3ea69bb,
    0x81b6c52b3,
    0x278872083,
    0xfca2c757b,
    0xd778ac36e,
    0x48dc74849,
    0xba5c00c92,
    0x5dd413a32,
    0x439fc3bd6,
];

// Maclaurin coefficients, 1/n! with alternating sign.
pub(crate) const S1: f64 = -1.0 / 6.0;
pub(crate) const S2: f64 = 1.0 / 120.0;
pub(crate) const S3: f64 = -1.0 / 5040.0;
pub(crate) const S4: f64 = 1.0 / 362880.0;

pub(crate) const C0: f64 = -1.0 / 2.0;
pub(crate) const C1: f64 = 1.0 / 24.0;
pub(crate) const C2: f64 = -1.0 / 720.0;
pub(crate) const C3: f64 = 1.0 / 40320.0;
pub(crate) const C4: f64 = -1.0 / 3628800.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_digits_spell_two_over_pi() {
        let mut acc = 0f64;
        let mut scale = 2f64.powi(-13);
        for &chunk in PI_DIGITS.iter().skip(1).take(3) {
            acc += chunk as f64 * scale;
            scale *= 2f64.powi(-(PI_DIGITS_CHUNK_BITS as i32));
        }
        assert!((acc - std::f64::consts::FRAC_2_PI).abs() < 1e-16);
        assert_eq!(REDUCTION.two_over_pi, std::f64::consts::FRAC_2_PI);
    }

    #[test]
    fn test_pi_digits_fit_chunk_width() {
        for &chunk in PI_DIGITS.iter() {
            assert!(chunk < 1 << PI_DIGITS_CHUNK_BITS);
        }
    }

    #[test]
    fn test_pi_over_two_splits() {
        let c = &REDUCTION;
        assert_eq!(c.pi_over_two, std::f64::consts::FRAC_PI_2);
        assert_eq!(c.pi_over_four, std::f64::consts::FRAC_PI_4);
        assert_eq!(
            c.pi_over_two_high + c.pi_over_two_high_tail,
            std::f64::consts::FRAC_PI_2
        );
        assert_eq!(
            c.pi_over_two_high + (c.pi_over_two_low + c.pi_over_two_low_tail),
            std::f64::consts::FRAC_PI_2
        );
        assert_eq!(c.pi_over_two_high.to_bits() & ((1 << 22) - 1), 0);
    }

    #[test]
    fn test_series_coefficients() {
        assert_eq!(1.0 / S1, -6.0);
        assert_eq!(1.0 / S4, 362880.0);
        assert_eq!(1.0 / C0, -2.0);
        assert!((1.0 / C4 + 3628800.0).abs() < 1e-6);
    }
}
