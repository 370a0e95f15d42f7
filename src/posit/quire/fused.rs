use super::*;
use crate::RoundFrom;

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> Quire<N, ES, LIMBS> {
  /// Return the sum of all `values`, rounded only once at the end.
  ///
  /// If any of the values is [NaR](Posit::NAR), the result is NaR. The empty sum is 0.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let values = [p16::round_from(1e7), p16::ONE, p16::round_from(-1e7)];
  /// assert_eq!(values.iter().fold(p16::ZERO, |sum, &x| sum + x), p16::ZERO);
  /// assert_eq!(q16::fused_sum(&values), p16::ONE);
  /// ```
  pub fn fused_sum<Word: crate::Word>(values: &[Posit<N, ES, Word>]) -> Posit<N, ES, Word> {
    let mut quire = Self::ZERO;
    for &x in values {
      quire.add_posit(x);
      if quire.is_nar() { return Posit::NAR }
    }
    Posit::round_from(&quire)
  }

  /// Return the dot product `a[0] × b[0] + a[1] × b[1] + …`, rounded only once at the end.
  ///
  /// If any of the values is [NaR](Posit::NAR), the result is NaR.
  ///
  /// # Panics
  ///
  /// If `a` and `b` have different lengths.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let tiny = 0.0009765625;  // 2^-10
  /// let a = [p32::round_from(3), p32::round_from(tiny), p32::round_from(-2)];
  /// let b = [p32::round_from(4), p32::round_from(tiny), p32::round_from(6)];
  /// let exact = 3. * 4. + tiny * tiny - 2. * 6.;
  /// assert_eq!(q32::fused_dot_product(&a, &b), p32::round_from(exact));
  /// ```
  pub fn fused_dot_product<Word: crate::Word>(
    a: &[Posit<N, ES, Word>],
    b: &[Posit<N, ES, Word>],
  ) -> Posit<N, ES, Word> {
    assert_eq!(a.len(), b.len(), "Dot product of vectors of different lengths");
    let mut quire = Self::ZERO;
    for (&x, &y) in a.iter().zip(b) {
      quire.add_product(x, y);
      if quire.is_nar() { return Posit::NAR }
    }
    Posit::round_from(&quire)
  }

  /// Return `a × b + c`, rounded only once.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// let a = p8::round_from(1.125);
  /// let b = p8::round_from(1.125);
  /// let c = p8::round_from(-1.25);
  /// assert_eq!(a * b + c, p8::ZERO);
  /// assert_eq!(q8::fused_multiply_add(a, b, c), p8::round_from(0.015625));
  /// ```
  pub fn fused_multiply_add<Word: crate::Word>(
    a: Posit<N, ES, Word>,
    b: Posit<N, ES, Word>,
    c: Posit<N, ES, Word>,
  ) -> Posit<N, ES, Word> {
    let mut quire = Self::from(c);
    quire.add_product(a, b);
    Posit::round_from(&quire)
  }

  /// Return `a × b - c`, rounded only once.
  pub fn fused_multiply_subtract<Word: crate::Word>(
    a: Posit<N, ES, Word>,
    b: Posit<N, ES, Word>,
    c: Posit<N, ES, Word>,
  ) -> Posit<N, ES, Word> {
    let mut quire = Self::ZERO;
    quire.add_product(a, b);
    quire.sub_posit(c);
    Posit::round_from(&quire)
  }

  /// Return `(a + b) × c`, rounded only once. The sum `a + b` is not rounded either: this is
  /// computed as `a × c + b × c` in the quire.
  pub fn fused_add_multiply<Word: crate::Word>(
    a: Posit<N, ES, Word>,
    b: Posit<N, ES, Word>,
    c: Posit<N, ES, Word>,
  ) -> Posit<N, ES, Word> {
    let mut quire = Self::ZERO;
    quire.add_product(a, c);
    quire.add_product(b, c);
    Posit::round_from(&quire)
  }

  /// Return `a × b - c × d`, rounded only once.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// // The determinant of [[a, b], [c, d]] is exactly 0 here.
  /// let (a, b) = (p16::round_from(1.5), p16::round_from(0.375));
  /// let (c, d) = (p16::round_from(4), p16::ONE);
  /// assert_eq!(q16::fused_multiply_multiply_subtract(a, d, b, c), p16::ZERO);
  /// ```
  pub fn fused_multiply_multiply_subtract<Word: crate::Word>(
    a: Posit<N, ES, Word>,
    b: Posit<N, ES, Word>,
    c: Posit<N, ES, Word>,
    d: Posit<N, ES, Word>,
  ) -> Posit<N, ES, Word> {
    let mut quire = Self::ZERO;
    quire.add_product(a, b);
    quire.sub_product(c, d);
    Posit::round_from(&quire)
  }
}
