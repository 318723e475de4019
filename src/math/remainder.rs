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
use crate::math::round::RoundTiesEven;

#[inline]
fn ieee_remainder_impl<T: RoundTiesEven>(x: T, y: T) -> T {
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }
    let regular_mod = x % y;
    if regular_mod.is_nan() {
        return T::nan();
    }
    if regular_mod == T::zero() && x.is_sign_negative() {
        return T::neg_zero();
    }
    let alternative = regular_mod - y.abs() * x.signum();
    if alternative.abs() == regular_mod.abs() {
        let div = x / y;
        if div.round_even().abs() > div.abs() {
            alternative
        } else {
            regular_mod
        }
    } else if alternative.abs() < regular_mod.abs() {
        alternative
    } else {
        regular_mod
    }
}

/// IEEE 754 remainder `x - y * n`, with `n` the quotient `x / y` rounded to
/// nearest, ties to even.
///
/// NaN in `x` or `y` is returned as is (in that order), payload included.
/// A zero result takes the sign of `x`.
#[inline]
pub fn ieee_remainder(x: f64, y: f64) -> f64 {
    ieee_remainder_impl(x, y)
}

/// IEEE 754 remainder for `f32`, see [ieee_remainder]
#[inline]
pub fn ieee_remainderf(x: f32, y: f32) -> f32 {
    ieee_remainder_impl(x, y)
}
