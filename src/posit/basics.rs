use super::*;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// The size of this Posit type in bits (i.e. parameter `N`).
  ///
  /// Note: this is the logical size, not necessarily the size of the underlying type.
  pub const BITS: u32 = {
    assert!(
      N >= 3,
      "A posit cannot have fewer than 3 bits",
    );
    assert!(
      N <= Word::BITS,
      "Cannot represent an n-bit Posit with an underlying Word machine type with fewer bits.",
    );
    N
  };

  /// The number of exponent bits (i.e. parameter `ES`).
  pub const ES: u32 = {
    let _ = Self::BITS;
    assert!(
      ES <= N,
      "Cannot use a number of exponent bits ES higher than the number of total bits N",
    );
    // Scale factors are handled as `i32`s. Products of two posits have twice the maximum scale
    // (N-2) × 2^ES, and the quire is 4× wider than that, so we want (N-2) × 2^ES to stay well
    // clear of `i32::MAX`. A bound of 2^24 leaves plenty of room, and still allows far larger ES
    // than anyone has a use for.
    assert!(
      ES < 24 && ((N as u64 - 2) << ES) < 1 << 24,
      "The chosen ES is too big for this N. Consider lowering the number of exponent bits.",
    );
    ES
  };

  /// A mask with the lowest [`Self::BITS`] bits set, i.e. the bits of a `u128` that hold a
  /// posit word.
  pub(crate) const MASK: u128 = u128::MAX >> (128 - Self::BITS);

  /// Bit `N-1`, the sign bit, which on its own is the NaR pattern.
  pub(crate) const SIGN_BIT: u128 = 1 << (Self::BITS - 1);

  /// Construct a posit from its raw bit representation. Bits higher (more significant) than the
  /// lowest `N` ([`Self::BITS`]) bits, if any, are ignored.
  ///
  /// Any bit pattern is a valid posit, so there is nothing to validate.
  #[inline]
  pub fn from_bits(bits: Word) -> Self {
    Self::from_u128(bits.to_u128())
  }

  /// Return the underlying bit representation of `self` as a machine word. Bits higher (more
  /// significant) than the lowest `N` ([`Self::BITS`]) bits, if any, are 0.
  #[inline]
  pub const fn to_bits(self) -> Word {
    self.0
  }

  /// As [`Self::from_bits`], from a `u128` working register.
  #[inline]
  pub(crate) fn from_u128(bits: u128) -> Self {
    Self(Word::of_u128(bits & Self::MASK))
  }

  /// As [`Self::to_bits`], into a `u128` working register.
  #[inline]
  pub(crate) fn to_u128(self) -> u128 {
    self.0.to_u128()
  }

  /// The bits of `self` as a two's complement number, sign-extended to an `i128` *and* shifted
  /// left so that bit `N-1` lands on bit 127. Comparing these compares the posits.
  #[inline]
  pub(crate) fn to_ordered(self) -> i128 {
    (self.to_u128() << (128 - Self::BITS)) as i128
  }

  /// Checks whether `self` is an exception ([0](Self::ZERO) or [NaR](Self::NAR)), that is, the
  /// same as `self == Self::ZERO || self == Self::NAR`, but faster.
  #[inline]
  pub(crate) fn is_special(self) -> bool {
    self.to_u128() & !Self::SIGN_BIT == 0
  }

  /// Checks whether `self` is [NaR](Self::NAR).
  #[inline]
  pub fn is_nar(self) -> bool {
    self == Self::NAR
  }

  /// Checks whether `self` is [0](Self::ZERO).
  #[inline]
  pub fn is_zero(self) -> bool {
    self == Self::ZERO
  }

  /// The sign of `self`: whether the word, as a two's complement number, is negative. Note that
  /// this is `true` for [NaR](Self::NAR).
  #[inline]
  pub fn is_negative(self) -> bool {
    self.to_u128() & Self::SIGN_BIT != 0
  }

  /// The sign-normalised word: the two's complement absolute value of `self`, as `N` bits. For
  /// any posit other than NaR, bit `N-1` of the result is 0.
  #[inline]
  pub(crate) fn abs_bits(self) -> u128 {
    let bits = self.to_u128();
    if self.is_negative() { bits.twos_complement() & Self::MASK } else { bits }
  }

  /// Inverse of [`Self::abs_bits`]: the posit whose absolute value has the bits `abs`, negated if
  /// `sign`.
  #[inline]
  pub(crate) fn from_abs(sign: bool, abs: u128) -> Self {
    debug_assert!(abs & !Self::MASK == 0);
    if sign { Self::from_u128(abs.twos_complement()) } else { Self::from_u128(abs) }
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<2, 0, u8>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_8_few() {}

  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<2, 1, u16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_16_few() {}

  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<9, 0, u8>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_8_many() {}

  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<17, 1, u16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_16_many() {}

  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<33, 2, u32>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_32_many() {}

  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<65, 3, u64>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_64_many() {}

  //

  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<8, 9, u8>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_8_larger() {}

  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<32, 20, u32>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_32_many() {}

  /// ```compile_fail
  /// use posit_quire::Posit;
  /// pub fn foo() -> u32 { Posit::<64, 19, u64>::ES }
  /// ```
  #[allow(dead_code)]
  fn es_fail_64_many() {}
}
