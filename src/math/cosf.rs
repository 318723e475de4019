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

/// Cosine is negative in the second and third quarter turns
#[inline(always)]
pub(crate) const fn cos_negates(red: ReducedArgument) -> bool {
    matches!(red.region, 1 | 2)
}

/// Computes cosine function
///
/// Any finite argument is accepted. NaN is returned unchanged, as are the
/// infinities: `cosf(f32::NEG_INFINITY)` is `f32::NEG_INFINITY`.
#[inline]
pub const fn cosf(x: f32) -> f32 {
    if !x.is_finite() {
        return x;
    }
    let ax = (x as f64).abs();
    match ReductionTier::of(ax) {
        ReductionTier::Bypass => 1.0,
        ReductionTier::Direct => cos_series(ax) as f32,
        ReductionTier::Medium | ReductionTier::Large => {
            let red = reduce(ax);
            let v = if red.swaps_kernel() {
                sin_series(red.r)
            } else {
                cos_series(red.r)
            };
            (if cos_negates(red) { -v } else { v }) as f32
        }
    }
}

/// Computes cosine function using FMA
#[inline]
pub fn f_cosf(x: f32) -> f32 {
    if !x.is_finite() {
        return x;
    }
    let ax = (x as f64).abs();
    match ReductionTier::of(ax) {
        ReductionTier::Bypass => 1.0,
        ReductionTier::Direct => f_cos_series(ax) as f32,
        ReductionTier::Medium | ReductionTier::Large => {
            let red = reduce(ax);
            let v = if red.swaps_kernel() {
                f_sin_series(red.r)
            } else {
                f_cos_series(red.r)
            };
            (if cos_negates(red) { -v } else { v }) as f32
        }
    }
}
