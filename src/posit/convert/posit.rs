use super::*;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Convert a posit into a different one, rounding according to the standard rules if the
  /// target cannot represent the value exactly.
  ///
  /// Converting to a posit with the same `ES` and at least as many bits is always exact. In other
  /// cases the value may be rounded, but as always 0 stays 0, NaR stays NaR, and no other value
  /// rounds to either.
  ///
  /// # Examples
  ///
  /// ```
  /// # use posit_quire::*;
  /// let pi: p64 = core::f64::consts::PI.round_into();
  /// let two: p8 = 2.round_into();
  /// let tau: p64 = pi * two.convert();
  /// assert_eq!(tau, core::f64::consts::TAU.round_into());
  ///
  /// assert_eq!(p64::MAX.convert::<8, 2, u8>(), p8::MAX);
  /// assert_eq!(p16::NAR.convert::<32, 2, u32>(), p32::NAR);
  /// ```
  pub fn convert<
    const N2: u32,
    const ES2: u32,
    Word2: crate::Word,
  >(self) -> Posit<N2, ES2, Word2> {
    if const { ES == ES2 && N <= N2 } {
      // Same `ES` and a wider target: the bit pattern just gets 0s appended on the right. The
      // sign bit lands on the new sign bit, and the extra fraction bits are all 0.
      Posit::from_u128(self.to_u128() << (N2 - N))
    } else {
      match self.try_decode() {
        Ok(decoded) => decoded.encode_round(false),
        Err(special) => if special == Self::ZERO { Posit::ZERO } else { Posit::NAR },
      }
    }
  }
}
