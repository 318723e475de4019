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

/// Sign of `x` as `-1`, `0` or `1`. Both zeros give `0`.
///
/// NaN has no sign and is reported as [MathError::SignOfNan].
#[inline]
pub const fn signf(x: f32) -> Result<i32, MathError> {
    if x < 0. {
        Ok(-1)
    } else if x > 0. {
        Ok(1)
    } else if x == 0. {
        Ok(0)
    } else {
        Err(MathError::SignOfNan)
    }
}

/// Sign of `x` as `-1`, `0` or `1`, see [signf]
#[inline]
pub const fn sign(x: f64) -> Result<i32, MathError> {
    if x < 0. {
        Ok(-1)
    } else if x > 0. {
        Ok(1)
    } else if x == 0. {
        Ok(0)
    } else {
        Err(MathError::SignOfNan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signf() {
        assert_eq!(signf(2.5), Ok(1));
        assert_eq!(signf(-1e-45), Ok(-1));
        assert_eq!(signf(0.0), Ok(0));
        assert_eq!(signf(-0.0), Ok(0));
        assert_eq!(signf(f32::NEG_INFINITY), Ok(-1));
        assert_eq!(signf(f32::NAN), Err(MathError::SignOfNan));
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(f64::MAX), Ok(1));
        assert_eq!(sign(-3.0), Ok(-1));
        assert_eq!(sign(-0.0), Ok(0));
        assert_eq!(sign(f64::INFINITY), Ok(1));
        assert_eq!(sign(-f64::NAN), Err(MathError::SignOfNan));
    }
}
