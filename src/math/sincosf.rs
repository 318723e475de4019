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
use crate::math::cosf::cos_negates;
use crate::math::reduce::{ReductionTier, reduce};
use crate::math::series::{cos_series, f_cos_series, f_sin_series, sin_series};
use crate::math::sinf::sin_negates;

/// Sine and cosine sharing one argument reduction
///
/// Each component is bit identical to [sinf](crate::sinf) and [cosf](crate::cosf).
#[inline]
pub const fn sincosf(x: f32) -> (f32, f32) {
    if !x.is_finite() {
        return (x, x);
    }
    let ax = (x as f64).abs();
    match ReductionTier::of(ax) {
        ReductionTier::Bypass => (x, 1.0),
        ReductionTier::Direct => (sin_series(x as f64) as f32, cos_series(ax) as f32),
        ReductionTier::Medium | ReductionTier::Large => {
            let red = reduce(ax);
            let s = sin_series(red.r);
            let c = cos_series(red.r);
            let (zs, zc) = if red.swaps_kernel() { (c, s) } else { (s, c) };
            let zs = if sin_negates(x, red) { -zs } else { zs };
            let zc = if cos_negates(red) { -zc } else { zc };
            (zs as f32, zc as f32)
        }
    }
}

/// Sine and cosine function using FMA
#[inline]
pub fn f_sincosf(x: f32) -> (f32, f32) {
    if !x.is_finite() {
        return (x, x);
    }
    let ax = (x as f64).abs();
    match ReductionTier::of(ax) {
        ReductionTier::Bypass => (x, 1.0),
        ReductionTier::Direct => (f_sin_series(x as f64) as f32, f_cos_series(ax) as f32),
        ReductionTier::Medium | ReductionTier::Large => {
            let red = reduce(ax);
            let s = f_sin_series(red.r);
            let c = f_cos_series(red.r);
            let (zs, zc) = if red.swaps_kernel() { (c, s) } else { (s, c) };
            let zs = if sin_negates(x, red) { -zs } else { zs };
            let zc = if cos_negates(red) { -zc } else { zc };
            (zs as f32, zc as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::cosf::{cosf, f_cosf};
    use crate::math::sinf::{f_sinf, sinf};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn f_sincosf_test() {
        let sincos0 = sincosf(0.0);
        assert_eq!(sincos0.0, 0.0);
        assert_eq!(sincos0.1, 1.0);
        let sincos_pi_0_5 = sincosf(0.5);
        assert!((sincos_pi_0_5.0 - 0.47942555).abs() < 1e-7);
        assert!((sincos_pi_0_5.1 - 0.87758255).abs() < 1e-7);
        let sincos_pi_n0_5 = f_sincosf(-0.5);
        assert!((sincos_pi_n0_5.0 + 0.47942555).abs() < 1e-7);
        assert!((sincos_pi_n0_5.1 - 0.87758255).abs() < 1e-7);
        let inf = sincosf(f32::NEG_INFINITY);
        assert_eq!(inf, (f32::NEG_INFINITY, f32::NEG_INFINITY));
    }

    #[test]
    fn sincosf_matches_single_functions() {
        let mut rng = StdRng::seed_from_u64(0x5c);
        for _ in 0..50_000 {
            let x = f32::from_bits(rng.random::<u32>());
            let (s, c) = sincosf(x);
            assert_eq!(s.to_bits(), sinf(x).to_bits(), "x = {x}");
            assert_eq!(c.to_bits(), cosf(x).to_bits(), "x = {x}");
            let (fs, fc) = f_sincosf(x);
            assert_eq!(fs.to_bits(), f_sinf(x).to_bits(), "x = {x}");
            assert_eq!(fc.to_bits(), f_cosf(x).to_bits(), "x = {x}");
        }
    }

    #[test]
    fn sincosf_pythagorean_identity() {
        let mut rng = StdRng::seed_from_u64(0x9174);
        let ranges = [
            (1e-6f32, std::f32::consts::FRAC_PI_4),
            (std::f32::consts::FRAC_PI_4, 16_000_000f32),
            (16_000_000f32, f32::MAX),
        ];
        for (lo, hi) in ranges {
            for _ in 0..20_000 {
                let x = rng.random_range(lo..hi);
                let (s, c) = sincosf(x);
                let norm = s as f64 * s as f64 + c as f64 * c as f64;
                assert!((norm - 1.0).abs() < 1e-6, "x = {x}, norm = {norm}");
            }
        }
    }
}
