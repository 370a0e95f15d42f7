use super::*;
use super::accumulate::{add_with_carry, sub_with_borrow};

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> Quire<N, ES, LIMBS> {
  /// Add a posit to `self`, exactly. Adding [NaR](Posit::NAR) makes the quire NaR.
  ///
  /// Standard: "**qAddP**".
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let mut quire = q16::ZERO;
  /// quire.add_posit(p16::round_from(0.5));
  /// quire.add_posit(p16::round_from(0.25));
  /// assert_eq!(p16::round_from(&quire), p16::round_from(0.75));
  /// ```
  pub fn add_posit<Word: crate::Word>(&mut self, posit: Posit<N, ES, Word>) {
    match posit.try_decode() {
      Ok(decoded) => self.accumulate_decoded(decoded, false),
      Err(special) => if special == Posit::NAR { *self = Self::NAR },
    }
  }

  /// Subtract a posit from `self`, exactly. Subtracting [NaR](Posit::NAR) makes the quire NaR.
  ///
  /// Standard: "**qSubP**".
  pub fn sub_posit<Word: crate::Word>(&mut self, posit: Posit<N, ES, Word>) {
    match posit.try_decode() {
      Ok(decoded) => self.accumulate_decoded(decoded, true),
      Err(special) => if special == Posit::NAR { *self = Self::NAR },
    }
  }

  /// Add the product `a × b` to `self`, exactly: the product is not rounded. If either posit is
  /// [NaR](Posit::NAR), the quire becomes NaR.
  ///
  /// Standard: "**qMulAdd**".
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let third = p8::round_from(1. / 3.);  // Not quite 1/3, but 0.34375
  /// let mut quire = q8::ZERO;
  /// quire.add_product(third, p8::round_from(3));
  /// quire.sub_posit(p8::ONE);
  /// assert_eq!(p8::round_from(&quire), p8::round_from(0.03125));
  /// ```
  pub fn add_product<Word: crate::Word>(&mut self, a: Posit<N, ES, Word>, b: Posit<N, ES, Word>) {
    self.multiply_into(a, b, false)
  }

  /// Subtract the product `a × b` from `self`, exactly: the product is not rounded. If either
  /// posit is [NaR](Posit::NAR), the quire becomes NaR.
  ///
  /// Standard: "**qMulSub**".
  pub fn sub_product<Word: crate::Word>(&mut self, a: Posit<N, ES, Word>, b: Posit<N, ES, Word>) {
    self.multiply_into(a, b, true)
  }

  fn multiply_into<Word: crate::Word>(
    &mut self,
    a: Posit<N, ES, Word>,
    b: Posit<N, ES, Word>,
    subtract: bool,
  ) {
    match (a.try_decode(), b.try_decode()) {
      (Ok(a), Ok(b)) => self.accumulate_product(a, b, subtract),
      (Err(a), _) if a == Posit::NAR => *self = Self::NAR,
      (_, Err(b)) if b == Posit::NAR => *self = Self::NAR,
      // One of them is 0.
      _ => (),
    }
  }

  /// Add another quire to `self`. If either is [NaR](Self::NAR) or the sum overflows, the result
  /// is NaR.
  ///
  /// Standard: "**qAddQ**".
  pub fn add_quire(&mut self, other: &Self) {
    self.combine(other, add_with_carry)
  }

  /// Subtract another quire from `self`. If either is [NaR](Self::NAR) or the difference
  /// overflows, the result is NaR.
  ///
  /// Standard: "**qSubQ**".
  pub fn sub_quire(&mut self, other: &Self) {
    self.combine(other, sub_with_borrow)
  }

  /// Segment-wise addition or subtraction, depending on `op`, with the same overflow check as
  /// [`Self::accumulate`] (but here `other` may be negative too).
  fn combine(&mut self, other: &Self, op: fn(u64, u64, bool) -> (u64, bool)) {
    if self.is_nar() || other.is_nar() {
      *self = Self::NAR;
      return
    }
    let was_negative = self.is_negative();
    let mut carry = false;
    for (segment, &x) in self.0.iter_mut().zip(other.0.iter()) {
      let (result, c) = op(*segment, x, carry);
      *segment = result;
      carry = c;
    }
    // The top bits of the sign-extended operands, plus the carry out of the top segment, give
    // the bit above the quire; the result fits if it equals the new sign bit.
    let extra_bit = was_negative ^ other.is_negative() ^ carry;
    if extra_bit != self.is_negative() {
      *self = Self::NAR
    }
  }

  /// Negate `self`, in place. [NaR](Self::NAR) stays NaR.
  ///
  /// This is an explicit mutation: use [`Neg`](core::ops::Neg) (which consumes the quire) to get
  /// a negated value instead.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let mut quire = q16::from(p16::round_from(1.5));
  /// quire.negate_in_place();
  /// assert_eq!(p16::round_from(&quire), p16::round_from(-1.5));
  /// ```
  pub fn negate_in_place(&mut self) {
    // Two's complement: flip all bits and add 1. NaR, the most negative number, maps to itself.
    let mut carry = true;
    for segment in self.0.iter_mut() {
      let (result, c) = add_with_carry(!*segment, 0, carry);
      *segment = result;
      carry = c;
    }
  }

  /// Multiply `self` by 2<sup>`n`</sup>, in place. If the result overflows, it becomes
  /// [NaR](Self::NAR).
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let mut quire = q16::from(p16::round_from(1.5));
  /// quire.shift_left(3);
  /// assert_eq!(p16::round_from(&quire), p16::round_from(12));
  /// ```
  pub fn shift_left(&mut self, n: u32) {
    if self.is_nar() || self.is_zero() { return }
    // The top `n + 1` bits must all be copies of the sign bit, otherwise some of them (or the
    // sign) would be lost.
    if n >= self.leading_run() {
      *self = Self::NAR;
      return
    }
    let words = (n / 64) as usize;
    let bits = n % 64;
    for i in (0 .. LIMBS).rev() {
      let hi = if i >= words { self.0[i - words] } else { 0 };
      let lo = if i > words { self.0[i - words - 1] } else { 0 };
      self.0[i] = if bits == 0 { hi } else { (hi << bits) | (lo >> (64 - bits)) };
    }
  }

  /// Divide `self` by 2<sup>`n`</sup>, in place, rounding towards negative infinity (i.e. an
  /// arithmetic shift right). Bits shifted out of the right end of the quire are lost.
  /// [NaR](Self::NAR) stays NaR.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let mut quire = q16::from(p16::round_from(-12));
  /// quire.shift_right(3);
  /// assert_eq!(p16::round_from(&quire), p16::round_from(-1.5));
  /// ```
  pub fn shift_right(&mut self, n: u32) {
    if self.is_nar() { return }
    let fill = if self.is_negative() { u64::MAX } else { 0 };
    let words = (n / 64) as usize;
    let bits = n % 64;
    for i in 0 .. LIMBS {
      let lo = self.0.get(i + words).copied().unwrap_or(fill);
      let hi = self.0.get(i + words + 1).copied().unwrap_or(fill);
      self.0[i] = if bits == 0 { lo } else { (lo >> bits) | (hi << (64 - bits)) };
    }
  }
}

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
  const LIMBS: usize,
> core::ops::AddAssign<Posit<N, ES, Word>> for Quire<N, ES, LIMBS> {
  /// Standard: "**qAddP**".
  fn add_assign(&mut self, rhs: Posit<N, ES, Word>) {
    self.add_posit(rhs)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
  const LIMBS: usize,
> core::ops::AddAssign<&Posit<N, ES, Word>> for Quire<N, ES, LIMBS> {
  /// Standard: "**qAddP**".
  fn add_assign(&mut self, rhs: &Posit<N, ES, Word>) {
    self.add_posit(*rhs)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
  const LIMBS: usize,
> core::ops::SubAssign<Posit<N, ES, Word>> for Quire<N, ES, LIMBS> {
  /// Standard: "**qSubP**".
  fn sub_assign(&mut self, rhs: Posit<N, ES, Word>) {
    self.sub_posit(rhs)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
  const LIMBS: usize,
> core::ops::SubAssign<&Posit<N, ES, Word>> for Quire<N, ES, LIMBS> {
  /// Standard: "**qSubP**".
  fn sub_assign(&mut self, rhs: &Posit<N, ES, Word>) {
    self.sub_posit(*rhs)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> core::ops::AddAssign<&Quire<N, ES, LIMBS>> for Quire<N, ES, LIMBS> {
  /// Standard: "**qAddQ**".
  fn add_assign(&mut self, rhs: &Quire<N, ES, LIMBS>) {
    self.add_quire(rhs)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> core::ops::SubAssign<&Quire<N, ES, LIMBS>> for Quire<N, ES, LIMBS> {
  /// Standard: "**qSubQ**".
  fn sub_assign(&mut self, rhs: &Quire<N, ES, LIMBS>) {
    self.sub_quire(rhs)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> core::ops::ShlAssign<u32> for Quire<N, ES, LIMBS> {
  fn shl_assign(&mut self, rhs: u32) {
    self.shift_left(rhs)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> core::ops::ShrAssign<u32> for Quire<N, ES, LIMBS> {
  fn shr_assign(&mut self, rhs: u32) {
    self.shift_right(rhs)
  }
}

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> core::ops::Neg for Quire<N, ES, LIMBS> {
  type Output = Self;

  /// Standard: "**qNegate**".
  fn neg(mut self) -> Self {
    self.negate_in_place();
    self
  }
}
