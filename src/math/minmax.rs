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
use num_traits::Float;

// IEEE 754:2019 maximum: NaN propagates, +0 is above -0
#[inline]
fn maximum_impl<T: Float>(x: T, y: T) -> T {
    if x != y {
        if !x.is_nan() {
            return if y < x { x } else { y };
        }
        return x;
    }
    if y.is_sign_negative() { x } else { y }
}

#[inline]
fn minimum_impl<T: Float>(x: T, y: T) -> T {
    if x != y {
        if !x.is_nan() {
            return if x < y { x } else { y };
        }
        return x;
    }
    if x.is_sign_negative() { x } else { y }
}

#[inline]
fn maximum_magnitude_impl<T: Float>(x: T, y: T) -> T {
    let ax = x.abs();
    let ay = y.abs();
    if ax > ay || ax.is_nan() {
        return x;
    }
    if ax == ay {
        return if x.is_sign_negative() { y } else { x };
    }
    y
}

#[inline]
fn minimum_magnitude_impl<T: Float>(x: T, y: T) -> T {
    let ax = x.abs();
    let ay = y.abs();
    if ax < ay || ax.is_nan() {
        return x;
    }
    if ax == ay {
        return if x.is_sign_negative() { x } else { y };
    }
    y
}

/// Larger of `x` and `y`.
///
/// Unlike [f32::max] a NaN in either argument is returned, and `+0.0` wins over `-0.0`.
#[inline]
pub fn maximumf(x: f32, y: f32) -> f32 {
    maximum_impl(x, y)
}

/// Smaller of `x` and `y`, NaN propagates and `-0.0` wins over `+0.0`
#[inline]
pub fn minimumf(x: f32, y: f32) -> f32 {
    minimum_impl(x, y)
}

/// Argument with the larger magnitude, ties go to the positive one
#[inline]
pub fn maximum_magnitudef(x: f32, y: f32) -> f32 {
    maximum_magnitude_impl(x, y)
}

/// Argument with the smaller magnitude, ties go to the negative one
#[inline]
pub fn minimum_magnitudef(x: f32, y: f32) -> f32 {
    minimum_magnitude_impl(x, y)
}

/// Larger of `x` and `y`, see [maximumf]
#[inline]
pub fn maximum(x: f64, y: f64) -> f64 {
    maximum_impl(x, y)
}

/// Smaller of `x` and `y`, see [minimumf]
#[inline]
pub fn minimum(x: f64, y: f64) -> f64 {
    minimum_impl(x, y)
}

#[inline]
pub fn maximum_magnitude(x: f64, y: f64) -> f64 {
    maximum_magnitude_impl(x, y)
}

#[inline]
pub fn minimum_magnitude(x: f64, y: f64) -> f64 {
    minimum_magnitude_impl(x, y)
}
