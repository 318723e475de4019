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
use std::error::Error;
use std::fmt::Display;

/// Failures of the helpers that have no float result to return
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MathError {
    /// NaN carries no sign
    SignOfNan,
    /// Requested digit count is past the widest power of ten the precision can scale by
    RoundingDigitsOutOfRange { digits: u32, max: u32 },
    DivideByZero,
    /// Quotient does not fit the integer type, `MIN / -1`
    DivisionOverflow,
}

impl Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::SignOfNan => f.write_str("Sign of NaN is undefined"),
            MathError::RoundingDigitsOutOfRange { digits, max } => f.write_fmt(format_args!(
                "Rounding digits must be in 0..={max}, but {digits} was requested"
            )),
            MathError::DivideByZero => f.write_str("Division by zero"),
            MathError::DivisionOverflow => f.write_str("Quotient overflows the integer type"),
        }
    }
}

impl Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(MathError::SignOfNan.to_string(), "Sign of NaN is undefined");
        let e = MathError::RoundingDigitsOutOfRange { digits: 9, max: 6 };
        assert_eq!(
            e.to_string(),
            "Rounding digits must be in 0..=6, but 9 was requested"
        );
        let boxed: Box<dyn Error> = Box::new(MathError::DivideByZero);
        assert_eq!(boxed.to_string(), "Division by zero");
    }
}
