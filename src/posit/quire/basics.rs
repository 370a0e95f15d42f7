use super::*;

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> Quire<N, ES, LIMBS> {
  /// Auxiliary const: the maximum (positive) scale of a `Posit<N, ES, _>`. The size of the quire
  /// is directly related to this (see [`Self::MIN_BITS`] and [`Self::FRACTION_WIDTH`] below).
  const MAX_EXP: u32 = {
    assert!(N >= 3, "A posit cannot have fewer than 3 bits");
    assert!(
      ES < 24 && ((N as u64 - 2) << ES) < 1 << 24,
      "Cannot use the quire with such a high ES for this N",
    );
    (N - 2) << ES
  };

  /// The quire size in bits.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q16::BITS, 256);
  /// ```
  pub const BITS: u32 = {
    assert!(
      LIMBS as u64 * 64 >= Self::MIN_BITS as u64,
      "This quire type has fewer than the minimum number of bits",
    );
    LIMBS as u32 * 64
  };

  /// The minimum number of bits of a quire for `Posit<N, ES, _>`.
  ///
  /// At worst, we need to represent the product [`Posit::MAX`] × [`Posit::MAX`] =
  /// 2<sup>2×MAX_EXP</sup> with [`FRACTION_WIDTH`](Self::FRACTION_WIDTH) = 2×MAX_EXP bits
  /// below the binary point, plus a sign bit.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q16::MIN_BITS, 226);
  /// ```
  pub const MIN_BITS: u32 = 4 * Self::MAX_EXP + 2;

  /// The position of the binary point, that is: 1 is represented in the quire as
  /// `1 << FRACTION_WIDTH`. The smallest product of two posits, [`Posit::MIN_POSITIVE`]²,
  /// is the lsb of the quire.
  pub const FRACTION_WIDTH: u32 = {
    let _ = Self::BITS;
    2 * Self::MAX_EXP
  };

  /// The minimum number of operations on the quire that can lead to overflow is
  /// 2<sup>[`PROD_LIMIT`](Self::PROD_LIMIT)</sup>; any number of
  /// [`add_product`](Self::add_product) calls smaller than that is guaranteed not to overflow.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q32::PROD_LIMIT, 31);  // Can do at least 2^31 - 1 products without overflow
  /// ```
  pub const PROD_LIMIT: u32 = Self::BITS - (4 * Self::MAX_EXP + 1);

  /// The minimum number of additions of posits that can lead to overflow is
  /// 2<sup>[`SUM_LIMIT`](Self::SUM_LIMIT)</sup>; any number of `+=` or `-=` operations smaller
  /// than that is guaranteed not to overflow.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q32::SUM_LIMIT, 151);  // Can sum at least 2^151 - 1 terms without overflow
  /// ```
  pub const SUM_LIMIT: u32 = Self::BITS - (3 * Self::MAX_EXP + 1);

  /// A quire that represents the posit number 0.
  pub const ZERO: Self = {
    let _ = Self::BITS;
    Self([0; LIMBS])
  };

  /// A quire that represents the posit value NaR. Its bit pattern is the most negative two's
  /// complement number, which is also what any accumulation that overflows the quire ends in.
  pub const NAR: Self = {
    let mut nar = Self::ZERO;
    nar.0[LIMBS - 1] = 1 << 63;
    nar
  };

  /// Construct a quire holding a small integer: `segment` goes in the least significant
  /// segment, and all others are 0. Note that the segment holds the bits *below* the binary
  /// point too, so this is `segment × 2^-FRACTION_WIDTH`.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(q8::from_segment(1 << q8::FRACTION_WIDTH), q8::from(p8::ONE));
  /// ```
  pub const fn from_segment(segment: u64) -> Self {
    let mut quire = Self::ZERO;
    quire.0[0] = segment;
    quire
  }

  /// Construct a quire from its raw bit representation, as an array of segments in little-endian
  /// order (least significant first).
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let quire = q8::from_segments([1 << 48, 0]);
  /// assert_eq!(p8::round_from(&quire), p8::ONE);
  /// ```
  pub const fn from_segments(segments: [u64; LIMBS]) -> Self {
    let _ = Self::BITS;
    Self(segments)
  }

  /// The raw bit representation of the quire, as an array of segments in little-endian order
  /// (least significant first).
  pub const fn segments(&self) -> &[u64; LIMBS] {
    &self.0
  }

  /// The least significant segment of the quire.
  pub const fn low_u64(&self) -> u64 {
    self.0[0]
  }

  /// The least significant 32 bits of the quire.
  pub const fn low_u32(&self) -> u32 {
    self.0[0] as u32
  }

  /// Checks whether `self` represents a NaR value.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert!(q32::NAR.is_nar());
  /// assert!(!q32::ZERO.is_nar());
  /// ```
  pub fn is_nar(&self) -> bool {
    // If the quire is not NaR, which is the normal case, it will almost always not start with
    // `0b1000…`, so we can return right away after looking at the top segment only.
    self.0[LIMBS - 1] == 1 << 63 && self.0[.. LIMBS - 1].iter().all(|&x| x == 0)
  }

  /// Checks whether `self` represents 0.
  pub fn is_zero(&self) -> bool {
    self.0.iter().all(|&x| x == 0)
  }

  /// Checks whether `self` is negative. Note that this is `true` for [NaR](Self::NAR).
  pub fn is_negative(&self) -> bool {
    self.0[LIMBS - 1] >> 63 != 0
  }

  /// The number of leading bits equal to the sign bit, the sign bit itself included. This is
  /// always at least 1, and it is [`Self::BITS`] for 0 and -2^-FRACTION_WIDTH.
  pub(crate) fn leading_run(&self) -> u32 {
    let fill = if self.is_negative() { u64::MAX } else { 0 };
    let mut run = 0;
    for &segment in self.0.iter().rev() {
      let segment = segment ^ fill;
      run += segment.leading_zeros();
      if segment != 0 { break }
    }
    run
  }
}


#[allow(dead_code)]
mod tests_compile_fail {
  /// ```compile_fail
  /// use posit_quire::Quire;
  /// let mut q: Quire<8, 2, 1> = Quire::ZERO;
  /// q += posit_quire::p8::ONE;
  /// ```
  fn quire_size_too_small_8() {}

  /// ```compile_fail
  /// use posit_quire::Quire;
  /// let mut q: Quire<16, 2, 3> = Quire::ZERO;
  /// q += posit_quire::p16::ONE;
  /// ```
  fn quire_size_too_small_16() {}

  /// ```compile_fail
  /// use posit_quire::Quire;
  /// let mut q: Quire<32, 2, 7> = Quire::ZERO;
  /// q += posit_quire::p32::ONE;
  /// ```
  fn quire_size_too_small_32() {}

  /// ```compile_fail
  /// use posit_quire::Quire;
  /// let mut q: Quire<64, 2, 15> = Quire::ZERO;
  /// q += posit_quire::p64::ONE;
  /// ```
  fn quire_size_too_small_64() {}
}
