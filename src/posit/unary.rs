use super::*;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Returns the posit whose bit pattern follows that of `self`, that is, the next posit up in
  /// the [total order](Ord). [`Self::MAX`] wraps around to [`Self::NAR`], and NaR to
  /// [`Self::MIN`].
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::NAR) output on a [NaR](Posit::NAR) input.
  #[inline]
  pub fn next(self) -> Self {
    Self::from_u128(self.to_u128().wrapping_add(1))
  }

  /// Returns the posit whose bit pattern precedes that of `self`, that is, the next posit down
  /// in the [total order](Ord). [`Self::MIN`] wraps around to [`Self::NAR`], and NaR to
  /// [`Self::MAX`].
  ///
  /// Note that, unlike every other function of a posit, `next` and `prior` do not produce a
  /// [NaR](Posit::NAR) output on a [NaR](Posit::NAR) input.
  #[inline]
  pub fn prior(self) -> Self {
    Self::from_u128(self.to_u128().wrapping_sub(1))
  }

  /// Return the absolute value of `self`. Exact; [NaR](Self::NAR) stays NaR.
  #[inline]
  pub fn abs(self) -> Self {
    Self::from_u128(self.abs_bits())
  }
}

impl<const N: u32, const ES: u32, Word: crate::Word>
core::ops::Neg for Posit<N, ES, Word> {
  type Output = Posit<N, ES, Word>;

  /// Negation is the two's complement of the whole word: exact, and 0 and NaR are their own
  /// negation.
  #[inline]
  fn neg(self) -> Self::Output {
    Posit::from_u128(self.to_u128().twos_complement())
  }
}

impl<const N: u32, const ES: u32, Word: crate::Word>
core::ops::Neg for &Posit<N, ES, Word> {
  type Output = Posit<N, ES, Word>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
