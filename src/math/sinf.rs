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
use crate::math::reduce::{ReducedArgument, ReductionTier, reduce};
use crate::math::series::{cos_series, f_cos_series, f_sin_series, sin_series};

/// Sine is odd: the result flips when exactly one of the argument sign and
/// the lower/upper half period says so.
#[inline(always)]
pub(crate) const fn sin_negates(x: f32, red: ReducedArgument) -> bool {
    x.is_sign_negative() != red.upper_half()
}

/// Sine function
///
/// Arguments of any finite magnitude are reduced exactly, so `sinf(1e30)` is
/// as accurate as `sinf(1.0)`. NaN is returned unchanged, and so are the
/// infinities: `sinf(f32::INFINITY)` is `f32::INFINITY`.
#[inline]
pub const fn sinf(x: f32) -> f32 {
    if !x.is_finite() {
        return x;
    }
    let ax = (x as f64).abs();
    match ReductionTier::of(ax) {
        ReductionTier::Bypass => x,
        ReductionTier::Direct => sin_series(x as f64) as f32,
        ReductionTier::Medium | ReductionTier::Large => {
            let red = reduce(ax);
            let v = if red.swaps_kernel() {
                cos_series(red.r)
            } else {
                sin_series(red.r)
            };
            (if sin_negates(x, red) { -v } else { v }) as f32
        }
    }
}

/// Sine function using FMA
#[inline]
pub fn f_sinf(x: f32) -> f32 {
    if !x.is_finite() {
        return x;
    }
    let ax = (x as f64).abs();
    match ReductionTier::of(ax) {
        ReductionTier::Bypass => x,
        ReductionTier::Direct => f_sin_series(x as f64) as f32,
        ReductionTier::Medium | ReductionTier::Large => {
            let red = reduce(ax);
            let v = if red.swaps_kernel() {
                f_cos_series(red.r)
            } else {
                f_sin_series(red.r)
            };
            (if sin_negates(x, red) { -v } else { v }) as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ulp_distance(a: f32, b: f32) -> u32 {
        fn ordered(v: f32) -> i64 {
            let t = v.to_bits() as i32 as i64;
            if t < 0 { i32::MIN as i64 - t } else { t }
        }
        (ordered(a) - ordered(b)).unsigned_abs() as u32
    }

    fn reference(x: f32) -> f32 {
        (x as f64).sin() as f32
    }

    #[test]
    fn sinf_test() {
        assert_eq!(sinf(0.0), 0.0);
        assert_eq!(sinf(-0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(sinf(std::f32::consts::FRAC_PI_2), 1.0);
        assert_eq!(sinf(-std::f32::consts::FRAC_PI_2), -1.0);
        assert!(ulp_distance(sinf(std::f32::consts::PI), reference(std::f32::consts::PI)) <= 1);
        assert_eq!(sinf(1e-5), 1e-5);
        assert!((sinf(0.5) - 0.47942555).abs() < 1e-7);
        assert!((sinf(-0.5) + 0.47942555).abs() < 1e-7);
    }

    #[test]
    fn sinf_non_finite() {
        assert!(sinf(f32::NAN).is_nan());
        let payload = f32::from_bits(0x7fc0_1234);
        assert_eq!(sinf(payload).to_bits(), payload.to_bits());
        assert_eq!(sinf(f32::INFINITY), f32::INFINITY);
        assert_eq!(sinf(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert_eq!(f_sinf(f32::INFINITY), f32::INFINITY);
        assert!(f_sinf(f32::NAN).is_nan());
    }

    #[test]
    fn sinf_quadrants() {
        assert!(ulp_distance(sinf(2.0), reference(2.0)) <= 1);
        assert!(ulp_distance(sinf(4.0), reference(4.0)) <= 1);
        assert!(ulp_distance(sinf(5.0), reference(5.0)) <= 1);
        assert!(ulp_distance(sinf(-2.0), reference(-2.0)) <= 1);
        assert!(ulp_distance(sinf(-4.0), reference(-4.0)) <= 1);
        assert!(sinf(4.0) < 0.0);
        assert!(sinf(-4.0) > 0.0);
    }

    #[test]
    fn sinf_huge_arguments() {
        assert!(ulp_distance(sinf(1e8), reference(1e8)) <= 1);
        assert!(ulp_distance(sinf(-1e8), reference(-1e8)) <= 1);
        assert!(ulp_distance(sinf(1e20), reference(1e20)) <= 1);
        assert!(ulp_distance(sinf(f32::MAX), reference(f32::MAX)) <= 1);
    }

    #[test]
    fn sinf_continuous_across_large_tier() {
        for i in 0..20 {
            let x = 15_999_990.0f32 + i as f32;
            assert!(ulp_distance(sinf(x), reference(x)) <= 1, "x = {x}");
        }
    }

    #[test]
    fn sinf_is_odd_and_bounded() {
        let mut rng = StdRng::seed_from_u64(0x51_4e);
        for _ in 0..100_000 {
            let x = f32::from_bits(rng.random_range(0u32..0x7f80_0000));
            let s = sinf(x);
            assert_eq!(sinf(-x).to_bits(), (-s).to_bits(), "x = {x}");
            assert!(s.abs() <= 1.0, "x = {x}");
        }
    }

    #[test]
    fn sinf_matches_reference() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50_000 {
            let x = rng.random_range(-std::f32::consts::FRAC_PI_4..std::f32::consts::FRAC_PI_4);
            assert!(ulp_distance(sinf(x), reference(x)) <= 1, "x = {x}");
        }
        for _ in 0..50_000 {
            let x = rng.random_range(-16_000_000f32..16_000_000f32);
            assert!(ulp_distance(sinf(x), reference(x)) <= 1, "x = {x}");
        }
        for _ in 0..50_000 {
            let x = f32::from_bits(rng.random_range(0x4b74_2400u32..0x7f80_0000));
            assert!(ulp_distance(sinf(x), reference(x)) <= 1, "x = {x}");
        }
    }

    #[test]
    fn f_sinf_test() {
        assert_eq!(f_sinf(0.0), 0.0);
        assert_eq!(f_sinf(std::f32::consts::FRAC_PI_2), 1.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20_000 {
            let x = f32::from_bits(rng.random_range(0u32..0x7f80_0000));
            assert!(ulp_distance(f_sinf(x), sinf(x)) <= 1, "x = {x}");
        }
    }
}
