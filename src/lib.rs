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
#![forbid(unsafe_code)]
#![allow(clippy::excessive_precision)]
#![deny(unreachable_pub)]
//! Single precision sine and cosine that stay accurate for every finite
//! argument, up to `f32::MAX`.
//!
//! Arguments are folded into [-π/4, π/4] by one of three reductions picked by
//! magnitude: none at all below π/4, a split π/2 (Cody-Waite) subtraction below
//! 16 000 000, and a multi-word product against the binary expansion of 2/π
//! (Payne-Hanek) above that. The folded angle is fed into a short Maclaurin
//! series evaluated in double precision.
//!
//! Every function is `const` except the `f_` variants, which fuse the series
//! multiply-adds when the target has FMA.
//!
//! ```
//! use trigkern::{cosf, sinf};
//!
//! assert_eq!(sinf(0.0), 0.0);
//! assert_eq!(cosf(std::f32::consts::PI), -1.0);
//! assert!((sinf(1e8) - 0.93163902).abs() < 1e-7);
//! ```
mod err;
mod math;
mod mlaf;

pub use err::MathError;
pub use math::{
    FloatBits, MidpointRounding, ReducedArgument, ReductionTier, big_mul, big_mul_signed,
    bit_decrement, bit_decrementf, bit_increment, bit_incrementf, copysign, copysignf, cosf,
    div_rem, f_cosf, f_sincosf, f_sinf, ieee_remainder, ieee_remainderf, log_base, log_basef,
    maximum, maximum_magnitude, maximum_magnitudef, maximumf, minimum, minimum_magnitude,
    minimum_magnitudef, minimumf, rem_pio2f, round, round_digits, round_digitsf, roundf,
    scalebf, sign, signf, sincosf, sinf, trunc, truncf,
};
