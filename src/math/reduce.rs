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
use crate::math::bits::FloatBits;
use crate::math::common::round_half_up;
use crate::math::dekker::Dekker;
use crate::math::trig_consts::{PI_DIGITS, PI_DIGITS_CHUNK_BITS, REDUCTION};

/// 2^-13, below this sin(x) = x and cos(x) = 1 in single precision
pub(crate) const BYPASS_THRESHOLD: f64 = f64::from_bits(0x3f20000000000000);
/// Past this the split π/2 constants lose too many bits and the digit table takes over
pub(crate) const LARGE_THRESHOLD: f64 = 16_000_000.0;

// Bits that may cancel in x - k·π/2 before the second correction pass runs
const FIXUP_EXPONENT_GAP: i32 = 15;
const LIMBS: usize = 10;
const CHUNK_MASK: u64 = (1 << PI_DIGITS_CHUNK_BITS) - 1;

/// Reduction algorithm selected by input magnitude
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReductionTier {
    /// |x| < 2^-13
    Bypass,
    /// |x| <= π/4
    Direct,
    /// |x| < 16 000 000, Cody-Waite
    Medium,
    /// Payne-Hanek against the 2/π digit table
    Large,
}

impl ReductionTier {
    #[inline]
    pub const fn of(ax: f64) -> ReductionTier {
        if ax < BYPASS_THRESHOLD {
            ReductionTier::Bypass
        } else if ax <= REDUCTION.pi_over_four {
            ReductionTier::Direct
        } else if ax < LARGE_THRESHOLD {
            ReductionTier::Medium
        } else {
            ReductionTier::Large
        }
    }
}

/// Angle folded into [-π/4, π/4] with the quarter turn it came from.
///
/// The input is `region · π/2 + r` for a non-negative magnitude; the sign of the
/// original argument is not tracked here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReducedArgument {
    pub r: f64,
    /// Quarter turn, always in `0..=3`
    pub region: u32,
}

impl ReducedArgument {
    /// Odd quarter turns exchange sine and cosine
    #[inline]
    pub const fn swaps_kernel(self) -> bool {
        self.region & 1 != 0
    }

    /// Regions 2 and 3, the half period where sine is negative
    #[inline]
    pub const fn upper_half(self) -> bool {
        self.region >= 2
    }
}

/// Reduces `|x|` modulo π/2.
///
/// Returns `r = NaN` with region 0 for NaN and infinities.
#[inline]
pub const fn rem_pio2f(x: f32) -> ReducedArgument {
    if !x.is_finite() {
        return ReducedArgument {
            r: f64::NAN,
            region: 0,
        };
    }
    reduce((x as f64).abs())
}

/// `ax` must be finite and non-negative.
#[inline]
pub(crate) const fn reduce(ax: f64) -> ReducedArgument {
    match ReductionTier::of(ax) {
        ReductionTier::Bypass | ReductionTier::Direct => ReducedArgument { r: ax, region: 0 },
        ReductionTier::Medium => reduce_medium(ax),
        ReductionTier::Large => reduce_large(ax),
    }
}

/// Cody-Waite reduction for π/4 < ax < 16 000 000.
///
/// Subtracts `k·π/2` in two pieces. When the remainder lost more than
/// [FIXUP_EXPONENT_GAP] bits against `ax`, the input sits close to a multiple
/// of π/2 and the tail is redone with the finer split.
pub(crate) const fn reduce_medium(ax: f64) -> ReducedArgument {
    let k = round_half_up(ax * REDUCTION.two_over_pi);
    let kf = k as f64;

    // k goes past 2^22 here, so k·pi_over_two_high may need 55 bits. Both `ax` and
    // the product are multiples of 2^-30 and differ by less than 1, so the
    // difference taken against the double-double product is exact.
    let product = Dekker::from_exact_mult(kf, REDUCTION.pi_over_two_high);
    let head = (ax - product.hi) - product.lo;
    let mut reduced = Dekker::new(-(kf * REDUCTION.pi_over_two_high_tail), head);

    let ax_exp = FloatBits::of(ax).biased_exponent as i32;
    let r_exp = FloatBits::of(reduced.to_f64()).biased_exponent as i32;

    if ax_exp - r_exp > FIXUP_EXPONENT_GAP {
        let v = Dekker::from_exact_sub(head, kf * REDUCTION.pi_over_two_low);
        reduced = Dekker::new(v.lo - kf * REDUCTION.pi_over_two_low_tail, v.hi);
    }

    ReducedArgument {
        r: reduced.to_f64(),
        region: (k & 3) as u32,
    }
}

#[inline(always)]
const fn limb(limbs: &[u64; LIMBS], i: usize, complement: bool) -> u64 {
    if complement {
        !limbs[i] & CHUNK_MASK
    } else {
        limbs[i]
    }
}

/// Payne-Hanek reduction, valid for any `ax >= 1` carrying at most 24 significant bits.
///
/// Multiplies the significand of `ax` against the 120 bits of 2/π that line up
/// with its exponent and keeps the fractional part of the product in 36-bit limbs.
/// The fraction is rebuilt into a double and scaled back by π/2.
pub(crate) const fn reduce_large(ax: f64) -> ReducedArgument {
    const W: u32 = PI_DIGITS_CHUNK_BITS;

    let bits = FloatBits::of(ax);
    let x_exp = bits.exponent();
    debug_assert!(x_exp >= 0 && x_exp < 36 * 10);

    let m = bits.full_significand() >> 29;

    let first = x_exp as usize / W as usize;
    let result_exp = x_exp as u32 - first as u32 * W;

    let mut limbs = [0u64; LIMBS];
    let mut carry = 0u64;
    let mut j = 120 / W as usize + 1;
    while j > 0 {
        j -= 1;
        let u = PI_DIGITS[first + j] * m + carry;
        limbs[j] = u & CHUNK_MASK;
        carry = u >> W;
    }

    // Integer part mod 4 and the first fraction bit
    let ltb = ((((limbs[0] << W) | limbs[1]) >> (W - 1 - result_exp)) & 7) as u32;

    // Fraction >= 0.5 is folded to 1 - fraction and the result negated
    let complement = (ltb & 1) != 0;
    let region = if complement {
        ((ltb >> 1) + 1) & 3
    } else {
        ltb >> 1
    };

    let mut i = 1usize;
    let mut mantissa = limb(&limbs, 1, complement) & ((1u64 << (W - result_exp)) - 1);
    while mantissa < 0x10000 && i + 2 < LIMBS {
        i += 1;
        mantissa = (mantissa << W) | limb(&limbs, i, complement);
    }
    let next_bits = limb(&limbs, i + 1, complement);

    let bc = {
        let lz = mantissa.leading_zeros().saturating_sub(11);
        if lz > W { W } else { lz }
    };
    mantissa <<= bc;
    mantissa |= next_bits >> (W - bc);

    let r_exp = 52 + result_exp as i32 - bc as i32 - (i as u32 * W) as i32;

    let fraction = FloatBits {
        negative: complement,
        biased_exponent: (r_exp + FloatBits::EXPONENT_BIAS) as u32,
        significand: mantissa & FloatBits::SIGNIFICAND_MASK,
    }
    .to_f64();

    ReducedArgument {
        r: fraction * REDUCTION.pi_over_two,
        region,
    }
}
