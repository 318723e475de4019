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
#![allow(clippy::approx_constant)]
mod bigmul;
mod bitinc;
mod bits;
mod common;
mod cosf;
mod dekker;
mod divrem;
mod logbase;
mod minmax;
mod reduce;
mod remainder;
mod round;
mod scaleb;
mod series;
mod sign;
mod sincosf;
mod sinf;
mod trig_consts;

pub use bigmul::{big_mul, big_mul_signed};
pub use bitinc::{bit_decrement, bit_decrementf, bit_increment, bit_incrementf};
pub use bits::FloatBits;
pub use common::{copysign, copysignf};
pub use cosf::{cosf, f_cosf};
pub use divrem::div_rem;
pub use logbase::{log_base, log_basef};
pub use minmax::{
    maximum, maximum_magnitude, maximum_magnitudef, maximumf, minimum, minimum_magnitude,
    minimum_magnitudef, minimumf,
};
pub use reduce::{ReducedArgument, ReductionTier, rem_pio2f};
pub use remainder::{ieee_remainder, ieee_remainderf};
pub use round::{MidpointRounding, round, round_digits, round_digitsf, roundf, trunc, truncf};
pub use scaleb::scalebf;
pub use sign::{sign, signf};
pub use sincosf::{f_sincosf, sincosf};
pub use sinf::{f_sinf, sinf};
