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
use num_traits::PrimInt;

/// Quotient truncated towards zero and the remainder `a - q * b`, which takes
/// the sign of `a`.
///
/// # Errors
///
/// [MathError::DivideByZero] for `b == 0` and [MathError::DivisionOverflow]
/// for `MIN / -1` on signed types.
#[inline]
pub fn div_rem<T: PrimInt>(a: T, b: T) -> Result<(T, T), MathError> {
    if b == T::zero() {
        return Err(MathError::DivideByZero);
    }
    let div = a.checked_div(&b).ok_or(MathError::DivisionOverflow)?;
    Ok((div, a - div * b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_rem_signed() {
        assert_eq!(div_rem(7i32, 2), Ok((3, 1)));
        assert_eq!(div_rem(-7i32, 2), Ok((-3, -1)));
        assert_eq!(div_rem(7i32, -2), Ok((-3, 1)));
        assert_eq!(div_rem(-7i64, -2), Ok((3, -1)));
        assert_eq!(div_rem(i64::MIN, 1), Ok((i64::MIN, 0)));
        assert_eq!(div_rem(i32::MIN, -1), Err(MathError::DivisionOverflow));
        assert_eq!(div_rem(5i32, 0), Err(MathError::DivideByZero));
    }

    #[test]
    fn test_div_rem_unsigned() {
        assert_eq!(div_rem(u64::MAX, 10), Ok((u64::MAX / 10, 5)));
        assert_eq!(div_rem(3u32, 7), Ok((0, 3)));
        assert_eq!(div_rem(3u32, 0), Err(MathError::DivideByZero));
    }
}
