use super::*;

/// The fields of a sign-normalised posit word, as extracted by [`Posit::fields`].
#[derive(Clone, Copy, Debug)]
struct Fields {
  /// The regime value `k`.
  k: i32,
  /// Number of bits taken up by the regime, including its terminating bit if present.
  regime_size: u32,
  /// Number of exponent bits actually present (≤ ES).
  exponent_size: u32,
  /// The exponent, with any bits cut off by the end of the word taken to be 0.
  exponent_value: u32,
  /// Number of fraction bits actually present.
  fraction_size: u32,
  /// The fraction bits, without the hidden bit.
  fraction: u128,
}

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Pick apart the regime, exponent, and fraction of `self`.
  ///
  /// Once the sign is taken care of (by working on the two's complement absolute value), a posit
  /// word looks like this:
  ///
  /// ```text
  ///   0 rrrr…r̄ eee ffff…
  ///     │      │   └ fraction: whatever bits are left, with an implicit leading 1
  ///     │      └ exponent: up to ES bits, possibly cut short by the end of the word
  ///     └ regime: a run of identical bits, terminated by the opposite bit or by the end of the
  ///       word
  /// ```
  ///
  /// A run of `m` 1s encodes `k = m - 1`, and a run of `m` 0s encodes `k = -m`.
  ///
  /// This is well defined for 0 and NaR too (both have a run of `N-1` zeros, so `k = -(N-1)`,
  /// which no other posit has), although the result does not mean anything.
  fn fields(self) -> Fields {
    let abs = self.abs_bits();
    let run = abs.run_length(Self::BITS - 1);
    let k = if abs & (1 << (Self::BITS - 2)) != 0 { run as i32 - 1 } else { -(run as i32) };

    // The terminating bit counts as part of the regime, unless the run goes all the way to the
    // end of the word and there is no terminating bit.
    let regime_size = (run + 1).min(Self::BITS - 1);
    let remaining = Self::BITS - 1 - regime_size;
    let exponent_size = Self::ES.min(remaining);
    let fraction_size = remaining - exponent_size;

    let fraction = abs & ((1 << fraction_size) - 1);
    let exponent_bits = (abs >> fraction_size) & ((1 << exponent_size) - 1);
    // If the exponent is cut short, the missing bits are 0s on the right.
    let exponent_value = (exponent_bits << (Self::ES - exponent_size)) as u32;

    Fields { k, regime_size, exponent_size, exponent_value, fraction_size, fraction }
  }

  /// The regime value `k` of `self`, so that the scale factor is `k × 2^ES + exponent`.
  ///
  /// Both 0 and NaR have `k = -(N-1)`, one less than the smallest `k` of any other posit.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(p16::ONE.regime_k(), 0);
  /// assert_eq!(p16::MAX.regime_k(), 14);
  /// assert_eq!(p16::MIN_POSITIVE.regime_k(), -14);
  /// ```
  pub fn regime_k(self) -> i32 {
    self.fields().k
  }

  /// The number of exponent bits actually present in `self`, between 0 and `ES`: the regime may
  /// leave fewer than `ES` bits after it.
  pub fn exponent_size(self) -> u32 {
    self.fields().exponent_size
  }

  /// The exponent of `self`. If some exponent bits are cut off by the end of the word, those
  /// are 0.
  pub fn exponent_value(self) -> u32 {
    self.fields().exponent_value
  }

  /// The number of fraction bits actually present in `self`, not counting the hidden bit.
  pub fn fraction_size(self) -> u32 {
    self.fields().fraction_size
  }

  /// The fraction bits of `self`, without the hidden bit.
  pub fn fraction(self) -> Word {
    Word::of_u128(self.fields().fraction)
  }

  /// The fraction bits of `self`, with the hidden bit set at position
  /// [`fraction_size`](Self::fraction_size) (i.e. just left of the fraction bits).
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let x = Posit::<16, 0, u16>::from_bits(0b0_10_1100000000000);  // 1.75
  /// assert_eq!(x.fraction_size(), 13);
  /// assert_eq!(x.fraction_with_hidden_bit(), 0b1_1100000000000);
  /// ```
  pub fn fraction_with_hidden_bit(self) -> Word {
    let fields = self.fields();
    Word::of_u128(fields.fraction.set_bit(fields.fraction_size))
  }

  /// The binary scale factor of `self`, `k × 2^ES + exponent`: `self` is `±2^scale × 1.fraction`.
  ///
  /// For 0 and NaR this is 0.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(p16::ONE.scale_factor(), 0);
  /// assert_eq!(p16::MAX.scale_factor(), 56);
  /// assert_eq!(p16::MINUS_ONE.scale_factor(), 0);
  /// ```
  pub fn scale_factor(self) -> i32 {
    let fields = self.fields();
    if fields.k == -(Self::BITS as i32 - 1) {
      0
    } else {
      (fields.k << Self::ES) + fields.exponent_value as i32
    }
  }

  /// Decode a posit **which is not 0 or NaR** into a [`Decoded`].
  ///
  /// The fraction keeps exactly the bits that were in the word, no more. Callers that want the
  /// fraction at some fixed width shift it themselves.
  #[inline]
  pub(crate) fn decode_regular(self) -> Decoded {
    debug_assert!(!self.is_special(), "Should not pass {self:?} to decode_regular");
    let fields = self.fields();
    Decoded {
      sign: self.is_negative(),
      scale: (fields.k << Self::ES) + fields.exponent_value as i32,
      frac: fields.fraction.set_bit(fields.fraction_size),
    }
  }

  /// Decode a posit into a [`Decoded`], or return it unchanged if it is 0 or NaR.
  #[inline]
  pub(crate) fn try_decode(self) -> Result<Decoded, Self> {
    if self.is_special() { Err(self) } else { Ok(self.decode_regular()) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::PowerOf2;

  /// The value described by the public field accessors.
  fn value_from_fields<const N: u32, const ES: u32, Word: crate::Word>(
    p: Posit<N, ES, Word>,
  ) -> Rational {
    let frac = Rational::from(p.fraction_with_hidden_bit().to_u128() as u64);
    let value = frac * Rational::power_of_2(p.scale_factor() as i64 - p.fraction_size() as i64);
    if p.is_negative() { -value } else { value }
  }

  #[test]
  fn posit_6_2_manual() {
    // Cf. the table in `rational.rs`.
    type P = Posit<6, 2, u8>;
    let x = P::from_bits(0b000001);
    assert_eq!((x.regime_k(), x.exponent_size(), x.exponent_value(), x.fraction_size()), (-4, 0, 0, 0));
    let x = P::from_bits(0b001101);
    assert_eq!((x.regime_k(), x.exponent_size(), x.exponent_value(), x.fraction_size()), (-1, 2, 2, 1));
    assert_eq!(x.fraction(), 1);
    assert_eq!(x.scale_factor(), -2);
    let x = P::from_bits(0b011101);
    assert_eq!((x.regime_k(), x.exponent_size(), x.exponent_value(), x.fraction_size()), (2, 1, 2, 0));
    assert_eq!(x.scale_factor(), 10);
    let x = P::from_bits(0b011111);
    assert_eq!((x.regime_k(), x.exponent_size(), x.exponent_value(), x.fraction_size()), (4, 0, 0, 0));
    assert_eq!(x.scale_factor(), 16);
  }

  #[test]
  fn posit_16_0_manual() {
    type P = Posit<16, 0, u16>;
    let one = P::from_bits(0x4000);
    assert_eq!(one.regime_k(), 0);
    assert_eq!(one.fraction_size(), 13);
    assert_eq!(one.fraction_with_hidden_bit(), 1 << 13);
    assert_eq!(one.scale_factor(), 0);

    let minus_one = P::from_bits(0xc000);
    assert!(minus_one.is_negative());
    assert_eq!(minus_one.regime_k(), 0);
    assert_eq!(minus_one.scale_factor(), 0);

    let two = P::from_bits(0x6000);
    assert_eq!(two.regime_k(), 1);
    assert_eq!(two.scale_factor(), 1);
    assert_eq!(two.fraction(), 0);
  }

  #[test]
  fn zero_nar() {
    type P = Posit<16, 2, u16>;
    assert_eq!(P::ZERO.regime_k(), -15);
    assert_eq!(P::NAR.regime_k(), -15);
    assert_eq!(P::ZERO.scale_factor(), 0);
    assert_eq!(P::NAR.scale_factor(), 0);
    assert_eq!(P::ZERO.try_decode(), Err(P::ZERO));
    assert_eq!(P::NAR.try_decode(), Err(P::NAR));
  }

  #[test]
  fn extremes() {
    type P = Posit<16, 2, u16>;
    assert_eq!(P::MAX.scale_factor(), P::MAX_EXP);
    assert_eq!(P::MIN.scale_factor(), P::MAX_EXP);
    assert_eq!(P::MIN_POSITIVE.scale_factor(), P::MIN_EXP);
    assert_eq!(P::MAX_NEGATIVE.scale_factor(), P::MIN_EXP);
    assert_eq!(P::MAX.fraction_with_hidden_bit(), 1);
  }

  macro_rules! test_exhaustive {
    ($name:ident, $posit:ty) => {
      #[test]
      fn $name() {
        for p in <$posit>::cases_exhaustive() {
          assert_eq!(value_from_fields(p), Rational::try_from(p).unwrap(), "{p:?}");
          let decoded = p.decode_regular();
          assert_eq!(decoded.sign, p.is_negative());
          assert_eq!(decoded.scale, p.scale_factor());
          assert_eq!(decoded.frac, p.fraction_with_hidden_bit().to_u128());
        }
      }
    };
  }

  test_exhaustive!{posit_6_2_exhaustive, Posit::<6, 2, u8>}
  test_exhaustive!{posit_8_0_exhaustive, Posit::<8, 0, u8>}
  test_exhaustive!{posit_10_1_exhaustive, Posit::<10, 1, u16>}
  test_exhaustive!{posit_10_3_exhaustive, Posit::<10, 3, u16>}
  test_exhaustive!{p8_exhaustive, crate::p8}
  test_exhaustive!{p16_exhaustive, crate::p16}
  test_exhaustive!{posit_16_0_exhaustive, Posit::<16, 0, u16>}
  test_exhaustive!{posit_3_0_exhaustive, Posit::<3, 0, u8>}
  test_exhaustive!{posit_4_1_exhaustive, Posit::<4, 1, u8>}
}
