use super::*;

use crate::Quire;

use malachite::{Integer, rational::Rational};
use malachite::base::num::arithmetic::traits::{PowerOf2, Abs, Reciprocal};

/// The error type returned when a [Posit] or [Quire] cannot be converted to a [Rational] because
/// it is NaR.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNaR;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Convert a posit **which is not 0 or NaR** into a [Rational] value. Panics if `self` is 0 or
  /// NaR.
  ///
  /// This is a **super-explicit** and **super-obvious** rendition of the algorithm for decoding a
  /// posit, which shares no code with [`Self::decode_regular`], since this is what we will check
  /// the real codec against!
  fn into_rational_regular(self) -> Rational {
    // Move the N bits of the posit to the top of a u128, so that the sign is bit 127 and every
    // bit past the end of the posit is a 0.
    let x = self.to_u128() << (128 - Self::BITS);

    // If the number is NaR or 0, panic.
    if x == 0 || x == 1 << 127 { panic!("Should not pass {self:?} to into_rational_regular") }

    // First extract the sign; the rest of the algorithm takes place with the two's complement
    // absolute value of the posit.
    let sign = x >> 127 != 0;
    let x = if sign { x.wrapping_neg() } else { x };

    // Shift out the sign bit, the next one is the first bit of the regime. If it's 0, we are
    // looking for the number of consecutive 0s terminated by 1, if it's 1, we are looking for the
    // number of consecutive 1s terminated by 0. A run of 1s may also go all the way to the end of
    // the posit, but then the 0s we shifted in from the right terminate it anyway.
    let x = x << 1;
    let regime_sign = x >> 127;
    let regime_len = if regime_sign == 0 { x.leading_zeros() } else { (!x).leading_zeros() };
    // The regime is
    //   -n  if it's a run of n 0s, or
    //   n-1 if it's a run of n 1s.
    let regime = if regime_sign == 0 { -(regime_len as i64) } else { regime_len as i64 - 1 };

    // Shift out the regime bits incl. the terminating bit. After this, the leftmost ES bits are
    // the exponent. If fewer than ES bits were left after the regime, the missing ones are the
    // 0s shifted in from the right, which is exactly what we want.
    let x = (x << regime_len) << 1;
    let exponent = if Self::ES != 0 { x >> (128 - Self::ES) } else { 0 };

    // Shift out the exponent bits. What is left is the fraction, left-aligned: the numerator of a
    // fraction with denominator 2^128, to which we add the hidden bit.
    let fraction = x << Self::ES;

    let useed_pow_regime = Rational::power_of_2(regime << Self::ES);
    let exponent = Rational::power_of_2(exponent as i64);
    let fraction = Rational::from(1) + Rational::from(fraction) / Rational::power_of_2(128i64);

    let abs = useed_pow_regime * exponent * fraction;
    if sign { -abs } else { abs }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> TryFrom<Posit<N, ES, Word>> for Rational {
  type Error = IsNaR;

  fn try_from(value: Posit<N, ES, Word>) -> Result<Self, Self::Error> {
    if value == Posit::ZERO {
      Ok(Rational::from(0))
    } else if value == Posit::NAR {
      Err(IsNaR)
    } else {
      Ok(value.into_rational_regular())
    }
  }
}

impl From<Decoded> for Rational {
  fn from(value: Decoded) -> Self {
    let abs = Rational::from(value.frac)
      * Rational::power_of_2(value.scale as i64 - value.frac_size() as i64);
    if value.sign { -abs } else { abs }
  }
}

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> TryFrom<&Quire<N, ES, LIMBS>> for Rational {
  type Error = IsNaR;

  fn try_from(value: &Quire<N, ES, LIMBS>) -> Result<Self, Self::Error> {
    if value.is_nar() {
      Err(IsNaR)
    } else {
      // The quire is just a big fixed-point number with denominator 2^FRACTION_WIDTH.
      let mut limbs = value.segments().iter().rev();

      let first = limbs.next().unwrap();  // Most significant limb is signed
      let mut numerator = Integer::from(*first as i64);

      for rest in limbs {  // The others are unsigned
        numerator *= Integer::power_of_2(64u64);
        numerator += Integer::from(*rest);
      };

      let denominator = Integer::power_of_2(Quire::<N, ES, LIMBS>::FRACTION_WIDTH as u64);
      Ok(Rational::from_integers(numerator, denominator))
    }
  }
}

/// Check whether the rational number `exact` should be rounded to `posit`.
///
///   - Over- or under-flow (beyond [Posit::MAX] or below [Posit::MIN_POSITIVE] in absolute
///     value): round to the extreme of the same sign.
///   - Geometric case (where the regime is so long that exponent bits are cut off): round to
///     nearest posit in terms of absolute **ratio**, ties to even.
///   - Normal case (remaining domain): round to nearest posit in terms of absolute **difference**,
///     ties to even.
pub fn is_correct_rounded<const N: u32, const ES: u32, Word: crate::Word>(
  exact: Rational,
  posit: Posit<N, ES, Word>,
) -> bool {
  // Only the exact number 0 is rounded to posit 0.
  if posit == Posit::<N, ES, Word>::ZERO { return exact == Rational::from(0) }
  // No number is rounded to posit NaR.
  if posit == Posit::<N, ES, Word>::NAR { return false }

  // Overflow case: if exact is > MAX, < MIN, > 0 and < MIN_POSITIVE, or < 0 and > MAX_NEGATIVE
  if exact > Rational::from(0) {
    if exact >= Rational::try_from(Posit::<N, ES, Word>::MAX).unwrap() {
      return posit == Posit::<N, ES, Word>::MAX
    }
    else if exact <= Rational::try_from(Posit::<N, ES, Word>::MIN_POSITIVE).unwrap() {
      return posit == Posit::<N, ES, Word>::MIN_POSITIVE
    }
  } else if exact < Rational::from(0) {
    if exact <= Rational::try_from(Posit::<N, ES, Word>::MIN).unwrap() {
      return posit == Posit::<N, ES, Word>::MIN
    }
    else if exact >= Rational::try_from(Posit::<N, ES, Word>::MAX_NEGATIVE).unwrap() {
      return posit == Posit::<N, ES, Word>::MAX_NEGATIVE
    }
  } else {
    // A nonzero posit for an exact 0.
    return false
  }

  // Remaining cases: round to nearest (arithmetic nearest, or geometric nearest *only if* exponent
  // bits are cut). `distance` uses arithmetic or geometric distance accordingly.
  let distance = {
    // If `1 + regime_len + 1 + ES > N`, i.e. on the edges of the posit's dynamic range, some
    // exponent bits are chopped and hence we are in a region of geometric rounding.
    //
    // So if `regime_len ≤ N - 2 - ES`, we are in the arithmetic rounding region, otherwise we're
    // on the geometric rounding region. This `regime_len` corresponds to a scale factor of
    // `(N - 2 - ES) << ES`.
    let cutoff_exp = ((N as i64 - 2 - ES as i64).max(0)) << ES;
    let geometric_cutoff = Rational::power_of_2(cutoff_exp);
    let arithmetic_range = (&geometric_cutoff).reciprocal() ..= geometric_cutoff;
    let is_arithmetic_rounding = arithmetic_range.contains(&(&exact).abs());

    move |x: &Rational, y: &Rational| {
      if is_arithmetic_rounding {
        x - y
      } else {
        if x.abs() >= y.abs() { x / y } else { y / x }
      }
    }
  };

  // `posit` represents exactly the number `curr`, while the immediately previous and next posits
  // represent exactly the numbers `prev` and `next`, respectively.
  let prev = Rational::try_from(posit.prior());
  let curr = Rational::try_from(posit).unwrap();
  let next = Rational::try_from(posit.next());
  let posit_is_even = posit.to_u128() & 1 == 0;

  if exact == curr {
    // `exact` is exactly represented by `posit`
    true
  } else if let Ok(prev) = prev && prev < exact && exact < curr {
    // `exact` lies in interval `]posit.prior(), posit[`: needs to be closer to `posit` than to
    // `posit.prior()`, or same distance if `posit` is even.
    let distance_curr = distance(&curr, &exact);
    let distance_prev = distance(&exact, &prev);
    distance_curr < distance_prev || distance_curr == distance_prev && posit_is_even
  } else if let Ok(next) = next && curr < exact && exact < next {
    // `exact` lies in interval `]posit, posit.next()[`: needs to be closer to `posit` than to
    // `posit.next()`, or same distance if `posit` is even.
    let distance_curr = distance(&exact, &curr);
    let distance_next = distance(&next, &exact);
    distance_curr < distance_next || distance_curr == distance_next && posit_is_even
  } else {
    // Not in interval
    false
  }
}

/// As [`is_correct_rounded`], but an `exact` NaR must give a NaR `posit`.
pub fn try_is_correct_rounded<const N: u32, const ES: u32, Word: crate::Word>(
  exact: Result<Rational, IsNaR>,
  posit: Posit<N, ES, Word>,
) -> bool {
  match exact {
    Ok(exact) => is_correct_rounded(exact, posit),
    Err(IsNaR) => posit == Posit::NAR,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Manually test all bit patterns for a 6-bit posit with 2-bit exponent (cf. Posit
  /// Arithmetic, John L. Gustafson, Chapter 2).
  #[test]
  fn exhaustive_posit_6_2() {
    type Posit = super::Posit<6, 2, u8>;

    assert_eq!(Rational::try_from(Posit::from_bits(0b000000)), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Posit::from_bits(0b100000)), Err(IsNaR));

    for (bits, (num, den)) in [
      (0b000001u8, (1, 65536)),
      (0b000010, (1, 4096)),
      (0b000011, (1, 1024)),
      (0b000100, (1, 256)),
      (0b000101, (1, 128)),
      (0b000110, (1, 64)),
      (0b000111, (1, 32)),
      (0b001000, (2, 32)),
      (0b001001, (3, 32)),
      (0b001010, (4, 32)),
      (0b001011, (6, 32)),
      (0b001100, (8, 32)),
      (0b001101, (12, 32)),
      (0b001110, (16, 32)),
      (0b001111, (24, 32)),
      (0b010000, (1, 1)),
      (0b010001, (3, 2)),
      (0b010010, (2, 1)),
      (0b010011, (3, 1)),
      (0b010100, (4, 1)),
      (0b010101, (6, 1)),
      (0b010110, (8, 1)),
      (0b010111, (12, 1)),
      (0b011000, (16, 1)),
      (0b011001, (32, 1)),
      (0b011010, (64, 1)),
      (0b011011, (128, 1)),
      (0b011100, (256, 1)),
      (0b011101, (1024, 1)),
      (0b011110, (4096, 1)),
      (0b011111, (65536, 1)),
    ] {
      // Negative posits are the two's complement of positive ones, within the 6 bits.
      let pos = Posit::from_bits(bits);
      let neg = Posit::from_bits(bits.wrapping_neg());
      assert_eq!(pos.try_into(), Ok(Rational::from_signeds(num, den)));
      assert_eq!(neg.try_into(), Ok(Rational::from_signeds(-num, den)));
    }
  }

  /// More manual examples.
  #[test]
  fn examples() {
    assert_eq!(Posit::<6, 1, u8>::from_bits(0b100001).try_into(), Ok(Rational::from(-256)));
    assert_eq!(Posit::<6, 1, u8>::from_bits(0b000001).try_into(), Ok(Rational::from_signeds(1, 256)));
    assert_eq!(Posit::<6, 1, u8>::from_bits(0b001101).try_into(), Ok(Rational::from_signeds(5, 8)));
    assert_eq!(Posit::<6, 1, u8>::from_bits(0b110010).try_into(), Ok(Rational::from_signeds(-3, 4)));

    assert_eq!(Posit::<16, 2, u16>::from_bits(0b0_01_00_10000001000).try_into(), Ok(Rational::from_signeds(3080, 1 << 15)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b0_01_00_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 15)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b0_01_01_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 14)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b0_01_10_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 13)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b0_01_11_11011001000).try_into(), Ok(Rational::from_signeds(3784, 1 << 12)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b0_11110_10_11001000).try_into(), Ok(Rational::from(456 << 6)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b0_11110_01_11001000).try_into(), Ok(Rational::from(456 << 5)));

    assert_eq!(Posit::<16, 2, u16>::from_bits(0b1_00001_10_00111000).try_into(), Ok(Rational::from(-456 << 5)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b1_00001_01_00111000).try_into(), Ok(Rational::from(-456 << 6)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b1_001_01_0100111000).try_into(), Ok(Rational::from_signeds(-1736, 1 << 4)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b1_1110_10_100111000).try_into(), Ok(Rational::from_signeds(-712, 1 << 20)));

    assert_eq!(Posit::<16, 2, u16>::from_bits(0b1_11111111111110_1).try_into(), Ok(Rational::from_signeds(-1, 1i64 << 50)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b1_11111111111110_0).try_into(), Ok(Rational::from_signeds(-1, 1i64 << 48)));
    assert_eq!(Posit::<16, 2, u16>::from_bits(0b0_11111111110_00_10).try_into(), Ok(Rational::from(3i64 << 35)));

    assert_eq!(Posit::<16, 2, u16>::MAX.try_into(), Ok(Rational::from(1i64 << 56)));
    assert_eq!(Posit::<16, 2, u16>::MIN.try_into(), Ok(Rational::from(-1i64 << 56)));
    assert_eq!(Posit::<16, 2, u16>::MIN_POSITIVE.try_into(), Ok(Rational::from_signeds(1, 1i64 << 56)));
    assert_eq!(Posit::<16, 2, u16>::MAX_NEGATIVE.try_into(), Ok(Rational::from_signeds(-1, 1i64 << 56)));

    assert_eq!(Posit::<16, 2, u16>::ZERO.try_into(), Ok(Rational::from(0)));
    assert_eq!(Posit::<16, 2, u16>::ONE.try_into(), Ok(Rational::from(1)));
    assert_eq!(Posit::<16, 2, u16>::MINUS_ONE.try_into(), Ok(Rational::from(-1)));
    assert_eq!(Rational::try_from(Posit::<16, 2, u16>::NAR), Err(IsNaR));

    assert_eq!(Posit::<16, 0, u16>::from_bits(0x4000).try_into(), Ok(Rational::from(1)));
    assert_eq!(Posit::<16, 0, u16>::from_bits(0xc000).try_into(), Ok(Rational::from(-1)));
    assert_eq!(Posit::<16, 0, u16>::from_bits(0x6000).try_into(), Ok(Rational::from(2)));
  }

  #[test]
  fn decoded() {
    let x = Decoded { sign: false, scale: 3, frac: 0b1_0010 };
    assert_eq!(Rational::from(x), Rational::from_signeds(18 * 8, 16));
    let x = Decoded { sign: true, scale: -20, frac: 0b1 };
    assert_eq!(Rational::from(x), Rational::from_signeds(-1, 1 << 20));
  }

  #[test]
  fn quire() {
    // q8 has 128 bits, 48 of which are below the binary point.
    let q = crate::q8::from_segments([1 << 48, 0]);
    assert_eq!(Rational::try_from(&q), Ok(Rational::from(1)));
    let q = crate::q8::from_segments([123 << 48, 0]);
    assert_eq!(Rational::try_from(&q), Ok(Rational::from(123)));
    let q = crate::q8::from_segments([234 << 56, 0]);
    assert_eq!(Rational::try_from(&q), Ok(Rational::from(234 << 8)));
    let q = crate::q8::from_segments([123 << 32, 0]);
    assert_eq!(Rational::try_from(&q), Ok(Rational::from_signeds(123, 1 << 16)));
    let q = crate::q8::from_segments([0xffff_0000_0000_0000, u64::MAX]);
    assert_eq!(Rational::try_from(&q), Ok(Rational::from(-1)));
    let q = crate::q8::from_segments([0xffff_fff0_0000_0000, u64::MAX]);
    assert_eq!(Rational::try_from(&q), Ok(Rational::from_signeds(-1, 1 << 12)));
    let q = crate::q8::from_segments([0, 1 << 4]);
    assert_eq!(Rational::try_from(&q), Ok(Rational::power_of_2(64 + 4 - 48_i64)));

    assert_eq!(Rational::try_from(&crate::q32::NAR), Err(IsNaR))
  }
}
