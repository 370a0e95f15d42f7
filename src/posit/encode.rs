use super::*;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// The largest regime value `k` of any posit, that of [`Posit::MAX`].
  pub(crate) const MAX_K: i32 = Self::BITS as i32 - 2;

  /// The bits of the regime for `k`, as a `u128` holding a posit word whose regime starts at bit
  /// `N-2` (the terminating bit, a 0 for `k ≥ 0`, is simply left out). Also returns the number
  /// of bits the regime takes up, terminating bit included.
  ///
  /// `k` must be in `-(N-2) ..= N-2`.
  #[inline]
  fn regime_bits(k: i32) -> (u128, u32) {
    debug_assert!(-Self::MAX_K <= k && k <= Self::MAX_K);
    if k >= 0 {
      // k+1 ones starting at bit N-2, then a 0 (which for k = N-2 falls off the end).
      let ones = k as u32 + 1;
      let bits = ((1 << ones) - 1) << (Self::BITS - 1 - ones);
      (bits, (ones + 1).min(Self::BITS - 1))
    } else {
      // -k zeros starting at bit N-2, then a 1.
      let zeros = (-k) as u32;
      (Self::SIGN_BIT >> 1 >> zeros, zeros + 1)
    }
  }

  /// The regime of a positive posit with regime value `k`, with all other bits 0. Values of `k`
  /// outside the representable range are clamped to it.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// type P = Posit<8, 0, u8>;
  /// assert_eq!(P::encode_regime(0), 0b0_10_00000);
  /// assert_eq!(P::encode_regime(2), 0b0_1110_000);
  /// assert_eq!(P::encode_regime(-3), 0b0_0001_000);
  /// assert_eq!(P::encode_regime(6), 0b0_1111111);
  /// ```
  pub fn encode_regime(k: i32) -> Word {
    let k = k.clamp(-Self::MAX_K, Self::MAX_K);
    Word::of_u128(Self::regime_bits(k).0)
  }

  /// Left-align the bits that follow the regime, i.e. the `ES` exponent bits followed by the
  /// fraction bits (hidden bit excluded), in a `u128`. If the fraction is so long that it does not
  /// fit, the bits that are dropped are reported in the second return value (a sticky bit).
  #[inline]
  fn tail_bits(exponent: u32, fraction: u128) -> (u128, bool) {
    debug_assert!(u64::from(exponent) < 1 << Self::ES);
    let frac_size = fraction.most_significant_one_position() - 1;
    let frac_bits = fraction.clear_bit(frac_size);

    let exponent_bits = if Self::ES == 0 { 0 } else { (exponent as u128) << (128 - Self::ES) };
    let room = 128 - Self::ES;
    let (frac_bits, lost) =
      if frac_size <= room {
        // `checked_shl` because the shift may be the full 128 bits (if ES = 0 and there are no
        // fraction bits at all).
        (frac_bits.checked_shl(room - frac_size).unwrap_or(0), false)
      } else {
        let cut = frac_size - room;
        (frac_bits >> cut, frac_bits & ((1 << cut) - 1) != 0)
      };
    (exponent_bits | frac_bits, lost)
  }

  /// Assemble a posit with sign `sign`, regime `k`, exponent `exponent`, and fraction `fraction`,
  /// **rounding** if the fields do not fit in `N` bits.
  ///
  /// `fraction` carries its hidden bit as its most significant 1, and can be of any width: bits
  /// below the ones that fit are rounded off. `sticky` signals that there are nonzero bits even
  /// below the lsb of `fraction` (i.e. that the value being encoded is slightly bigger in
  /// magnitude than what `fraction` says, by less than one of its ulps). An `exponent` of 2^ES or
  /// more carries over into the regime, as if the scale `k × 2^ES + exponent` had been given
  /// directly. A zero `fraction` gives 0.
  ///
  /// The result is never 0 or NaR (for a nonzero `fraction`): magnitudes that are too large or too
  /// small saturate to [`MAX`](Self::MAX) or [`MIN_POSITIVE`](Self::MIN_POSITIVE) (with the
  /// appropriate sign), as posits taper to finite extremes.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// type P = Posit<16, 0, u16>;
  /// assert_eq!(P::assemble_with_rounding(false, 0, 0, 0b1, false), P::ONE);
  /// assert_eq!(P::assemble_with_rounding(true, 0, 0, 0b1, false).to_bits(), 0xc000);
  /// assert_eq!(P::assemble_with_rounding(false, 99, 0, 0b1, false), P::MAX);
  /// assert_eq!(P::assemble_with_rounding(false, 0, 1, 0b1, false), P::round_from(2));
  /// ```
  pub fn assemble_with_rounding(
    sign: bool,
    k: i32,
    exponent: u32,
    fraction: u128,
    sticky: bool,
  ) -> Self {
    if fraction == 0 { return Self::ZERO }

    // Bring the exponent into `0 .. 2^ES`, carrying the excess into the regime.
    let carry = i32::try_from(exponent >> Self::ES).unwrap_or(i32::MAX);
    let k = k.saturating_add(carry);
    let exponent = exponent & ((1 << Self::ES) - 1);

    let abs =
      if k >= Self::MAX_K {
        // Overflow: either the regime doesn't fit at all, or it takes up every bit, in which case
        // anything in the exponent or fraction could only round up, and there is nothing above
        // MAX. Saturate to the largest magnitude.
        Self::MAX.to_u128()
      } else if k < -Self::MAX_K {
        // Underflow: saturate to the smallest magnitude; posits never round to 0.
        Self::MIN_POSITIVE.to_u128()
      } else {
        let (regime, regime_size) = Self::regime_bits(k);
        // Number of bits left for the exponent and fraction. May well be 0.
        let available = Self::BITS - 1 - regime_size;

        // Line up everything after the regime on the left of a `u128`. Then we keep the leftmost
        // `available` bits, the next bit is the round bit, and all bits after that are sticky
        // bits.
        //
        //   tail = eeeffffffff|r|sssssss…
        //          ╰available╯
        let (tail, lost) = Self::tail_bits(exponent, fraction);
        let kept = if available == 0 { 0 } else { tail >> (128 - available) };
        let round = tail & (1 << (127 - available)) != 0;
        let sticky = sticky || lost || tail << (available + 1) != 0;

        // Round to nearest, ties to even: round up if the round bit is 1 and either any sticky bit
        // is 1 (we are above the halfway point) or the lsb is 1 (we are exactly halfway and
        // rounding up makes it even).
        //
        // Rounding up is just adding 1 to the word: if the fraction and exponent are all 1s, the
        // carry ripples into the regime, which is exactly right, since the next posit up has a
        // longer (k ≥ 0) or shorter (k < 0) regime. The carry cannot reach the sign bit: that
        // would require the regime to be all 1s already, which is the `k == MAX_K` case above.
        let bits = regime | kept;
        let odd = bits & 1 != 0;
        bits + u128::from(round && (sticky || odd))
      };

    Self::from_abs(sign, abs)
  }

  /// Construct the posit nearest to `±2^scale_factor × fraction / 2^(msb(fraction) - 1)`, i.e.
  /// the number whose sign is `sign`, whose binary scale factor is `scale_factor`, and whose
  /// fraction bits (with the hidden bit as the most significant 1) are `fraction`. Rounds if
  /// necessary, as [`Self::assemble_with_rounding`].
  ///
  /// This is the constructor shared by all conversions between formats: anything that can be
  /// put in the form `(sign, scale, fraction)` can be turned into a posit of any size with it.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(p32::from_parts(false, 0, 1), p32::ONE);
  /// assert_eq!(p32::from_parts(true, 1, 0b11), p32::round_from(-3.0_f64));
  /// assert_eq!(p32::from_parts(false, -3, 0b101), p32::round_from(0.15625_f64));
  /// ```
  pub fn from_parts(sign: bool, scale_factor: i32, fraction: u128) -> Self {
    Decoded { sign, scale: scale_factor, frac: fraction }.encode_round(false)
  }
}

impl Decoded {
  /// Encode a [`Decoded`] into the nearest posit, rounding as
  /// [`Posit::assemble_with_rounding`]. `sticky` signals that the value being encoded is slightly
  /// bigger in magnitude than `self` (by less than one ulp of `self.frac`).
  ///
  /// The scale is split into regime and exponent with a floor division by 2^ES, so that the
  /// exponent is always in `0 .. 2^ES`, also for negative scales.
  #[inline]
  pub(crate) fn encode_round<
    const N: u32,
    const ES: u32,
    Word: crate::Word,
  >(self, sticky: bool) -> Posit<N, ES, Word> {
    let es = Posit::<N, ES, Word>::ES;
    let k = self.scale >> es;
    let exponent = (self.scale & ((1 << es) - 1)) as u32;
    Posit::assemble_with_rounding(self.sign, k, exponent, self.frac, sticky)
  }
}
