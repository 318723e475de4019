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
/// Full 128-bit product of two unsigned 64-bit numbers as `(high, low)`
#[inline]
pub const fn big_mul(a: u64, b: u64) -> (u64, u64) {
    let product = a as u128 * b as u128;
    ((product >> 64) as u64, product as u64)
}

/// Full 128-bit product of two signed 64-bit numbers as `(high, low)`
#[inline]
pub const fn big_mul_signed(a: i64, b: i64) -> (i64, i64) {
    let (high, low) = big_mul(a as u64, b as u64);
    // Two's complement correction of the unsigned high word
    let high = (high as i64)
        .wrapping_sub((a >> 63) & b)
        .wrapping_sub((b >> 63) & a);
    (high, low as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_mul() {
        assert_eq!(big_mul(0, u64::MAX), (0, 0));
        assert_eq!(big_mul(1 << 32, 1 << 32), (1, 0));
        assert_eq!(big_mul(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
        assert_eq!(big_mul(0x1234_5678_9abc_def0, 16), (1, 0x2345_6789_abcd_ef00));
    }

    #[test]
    fn test_big_mul_signed() {
        assert_eq!(big_mul_signed(-1, 1), (-1, -1));
        assert_eq!(big_mul_signed(-1, -1), (0, 1));
        assert_eq!(big_mul_signed(i64::MIN, 2), (-1, 0));
        for (a, b) in [
            (i64::MAX, i64::MIN),
            (-123_456_789_012, 987_654_321_098),
            (i64::MIN, i64::MIN),
            (7, -3),
        ] {
            let expected = a as i128 * b as i128;
            let (high, low) = big_mul_signed(a, b);
            assert_eq!(((high as i128) << 64) | (low as u64 as i128), expected);
        }
    }
}
