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
use crate::math::common::{f_fmla, fmla};
use crate::math::reduce::BYPASS_THRESHOLD;
use crate::math::trig_consts::{C0, C1, C2, C3, C4, S1, S2, S3, S4};

/// 2^-7, from here on the four term series is required
const SINGLE_TERM_LIMIT: f64 = f64::from_bits(0x3f80000000000000);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SeriesTier {
    /// sin(r) = r, cos(r) = 1
    Identity,
    SingleTerm,
    FourTerms,
}

impl SeriesTier {
    #[inline(always)]
    pub(crate) const fn of(r: f64) -> SeriesTier {
        let ar = r.abs();
        if ar >= SINGLE_TERM_LIMIT {
            SeriesTier::FourTerms
        } else if ar >= BYPASS_THRESHOLD {
            SeriesTier::SingleTerm
        } else {
            SeriesTier::Identity
        }
    }
}

/// Evaluates sine on a reduced angle
#[inline]
pub(crate) const fn sin_series(r: f64) -> f64 {
    let x2 = r * r;
    match SeriesTier::of(r) {
        SeriesTier::FourTerms => {
            // r - r^3/3! + r^5/5! - r^7/7! + r^9/9!
            let x4 = x2 * x2;
            let p = fmla(x4, fmla(x2, S4, S3), fmla(x2, S2, S1));
            fmla(x2 * r, p, r)
        }
        SeriesTier::SingleTerm => fmla(x2 * r, S1, r),
        SeriesTier::Identity => r,
    }
}

/// Evaluates cosine on a reduced angle
#[inline]
pub(crate) const fn cos_series(r: f64) -> f64 {
    let x2 = r * r;
    match SeriesTier::of(r) {
        SeriesTier::FourTerms => {
            // 1 - r^2/2! + r^4/4! - r^6/6! + r^8/8! - r^10/10!
            let x4 = x2 * x2;
            let q = fmla(x4, fmla(x2, C4, C3), fmla(x2, C2, C1));
            fmla(x4, q, fmla(x2, C0, 1.0))
        }
        SeriesTier::SingleTerm => fmla(x2, C0, 1.0),
        SeriesTier::Identity => 1.0,
    }
}

/// Evaluates sine on a reduced angle using FMA
#[inline]
pub(crate) fn f_sin_series(r: f64) -> f64 {
    let x2 = r * r;
    match SeriesTier::of(r) {
        SeriesTier::FourTerms => {
            let x4 = x2 * x2;
            let p = f_fmla(x4, f_fmla(x2, S4, S3), f_fmla(x2, S2, S1));
            f_fmla(x2 * r, p, r)
        }
        SeriesTier::SingleTerm => f_fmla(x2 * r, S1, r),
        SeriesTier::Identity => r,
    }
}

/// Evaluates cosine on a reduced angle using FMA
#[inline]
pub(crate) fn f_cos_series(r: f64) -> f64 {
    let x2 = r * r;
    match SeriesTier::of(r) {
        SeriesTier::FourTerms => {
            let x4 = x2 * x2;
            let q = f_fmla(x4, f_fmla(x2, C4, C3), f_fmla(x2, C2, C1));
            f_fmla(x4, q, f_fmla(x2, C0, 1.0))
        }
        SeriesTier::SingleTerm => f_fmla(x2, C0, 1.0),
        SeriesTier::Identity => 1.0,
    }
}
