use super::*;

/// Add `a + b + carry`, returning the result and the carry out.
#[inline]
pub(crate) fn add_with_carry(a: u64, b: u64, carry: bool) -> (u64, bool) {
  let (sum, c1) = a.overflowing_add(b);
  let (sum, c2) = sum.overflowing_add(u64::from(carry));
  (sum, c1 || c2)
}

/// Subtract `a - b - borrow`, returning the result and the borrow out.
#[inline]
pub(crate) fn sub_with_borrow(a: u64, b: u64, borrow: bool) -> (u64, bool) {
  let (diff, b1) = a.overflowing_sub(b);
  let (diff, b2) = diff.overflowing_sub(u64::from(borrow));
  (diff, b1 || b2)
}

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> Quire<N, ES, LIMBS> {
  /// The core algorithm of the quire: adding (or subtracting, if `subtract`) the non-negative
  /// number `value << shift` to `self`.
  ///
  /// The shifted `value` spans at most three segments of the quire, starting at segment
  /// `shift / 64`. Those are added segment by segment, and then the carry (or borrow) is rippled
  /// up through the remaining segments, stopping early as soon as it's gone.
  ///
  /// E.g. if `shift` is 72, the logical value to add is laid out as
  ///
  /// ```text
  /// self  = [self[0], self[1], self[2], self[3], self[4], …]
  /// value = [0      , words[0], words[1], words[2], 0     , …]
  /// ```
  ///
  /// If the signed result does not fit in the quire, it becomes NaR. Adding to or subtracting
  /// from a NaR quire leaves it NaR.
  pub(crate) fn accumulate(&mut self, value: u128, shift: u32, subtract: bool) {
    if value == 0 || self.is_nar() { return }

    let offset = (shift / 64) as usize;
    let bits = shift % 64;
    let lo = value as u64;
    let hi = (value >> 64) as u64;
    let words =
      if bits == 0 {
        [lo, hi, 0]
      } else {
        [lo << bits, (hi << bits) | (lo >> (64 - bits)), hi >> (64 - bits)]
      };

    let was_negative = self.is_negative();
    let mut carry = false;
    let mut spilled = false;
    for (i, &word) in words.iter().enumerate() {
      match self.0.get_mut(offset + i) {
        Some(segment) => {
          let (result, c) =
            if subtract { sub_with_borrow(*segment, word, carry) }
            else { add_with_carry(*segment, word, carry) };
          *segment = result;
          carry = c;
        },
        None => spilled |= word != 0,
      }
    }
    for segment in self.0.iter_mut().skip(offset + words.len()) {
      if !carry { break }
      let (result, c) =
        if subtract { sub_with_borrow(*segment, 0, true) }
        else { add_with_carry(*segment, 0, true) };
      *segment = result;
      carry = c;
    }

    // Overflow check: extend `self` by one more bit (a copy of the sign) and `value` by a 0; the
    // carry out of the top segment goes into that extra bit. The result fits if and only if the
    // extra bit equals the new sign bit. Bits that did not even fit in the quire are overflow too,
    // of course.
    let extra_bit = was_negative != carry;
    if extra_bit != self.is_negative() || spilled {
      *self = Self::NAR
    }
  }

  /// Add (or subtract, if `subtract`) a posit value, given as a [`Decoded`], to `self`.
  pub(crate) fn accumulate_decoded(&mut self, x: Decoded, subtract: bool) {
    // The quire is a fixed-point number with the binary point `FRACTION_WIDTH` places from the
    // right. `x.frac` has its lsb at weight `2^(x.scale - frac_size)`, so it just has to be
    // shifted that many places from the binary point. The shift is never negative, because the
    // binary point is far enough from the right to hold even the smallest posit squared.
    let shift = Self::FRACTION_WIDTH as i32 + x.scale - x.frac_size() as i32;
    debug_assert!(shift >= 0, "Posit does not fit in the quire: {x:?}");
    self.accumulate(x.frac, shift as u32, x.sign != subtract)
  }

  /// Add (or subtract, if `subtract`) the exact product of two posit values, given as
  /// [`Decoded`]s, to `self`.
  pub(crate) fn accumulate_product(&mut self, a: Decoded, b: Decoded, subtract: bool) {
    // The fractions of two posits with `N ≤ 64` bits are each at most 64 bits wide, so their
    // product fits in a `u128` without rounding.
    debug_assert!(a.frac_size() < 64 && b.frac_size() < 64);
    let frac = a.frac * b.frac;
    let shift =
      Self::FRACTION_WIDTH as i32 + a.scale + b.scale - a.frac_size() as i32 - b.frac_size() as i32;
    debug_assert!(shift >= 0, "Product does not fit in the quire: {a:?} {b:?}");
    self.accumulate(frac, shift as u32, (a.sign != b.sign) != subtract)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  type Q = crate::q16;

  #[test]
  fn carries() {
    assert_eq!(add_with_carry(u64::MAX, 1, false), (0, true));
    assert_eq!(add_with_carry(u64::MAX, u64::MAX, true), (u64::MAX, true));
    assert_eq!(add_with_carry(1, 2, true), (4, false));
    assert_eq!(sub_with_borrow(0, 1, false), (u64::MAX, true));
    assert_eq!(sub_with_borrow(0, u64::MAX, true), (0, true));
    assert_eq!(sub_with_borrow(5, 2, true), (2, false));
  }

  #[test]
  fn add_aligned() {
    let mut q = Q::ZERO;
    q.accumulate(0x1_0000_0000_0000_0002, 64, false);
    assert_eq!(q.segments(), &[0, 2, 1, 0]);
  }

  #[test]
  fn add_unaligned() {
    let mut q = Q::ZERO;
    q.accumulate(0xf000_0000_0000_0000_0000_0000_0000_000f, 4, false);
    assert_eq!(q.segments(), &[0xf0, 0, 0xf, 0]);
  }

  #[test]
  fn carry_ripples() {
    let mut q = Q::from_segments([u64::MAX, u64::MAX, u64::MAX, 0]);
    q.accumulate(1, 0, false);
    assert_eq!(q.segments(), &[0, 0, 0, 1]);
  }

  #[test]
  fn borrow_ripples() {
    let mut q = Q::from_segments([0, 0, 0, 1]);
    q.accumulate(1, 0, true);
    assert_eq!(q.segments(), &[u64::MAX, u64::MAX, u64::MAX, 0]);
  }

  #[test]
  fn negative_results() {
    let mut q = Q::ZERO;
    q.accumulate(1, 70, true);
    assert_eq!(q.segments(), &[0, u64::MAX << 6, u64::MAX, u64::MAX]);
    q.accumulate(1, 70, false);
    assert_eq!(q, Q::ZERO);
  }

  #[test]
  fn overflow_is_nar() {
    let mut q = Q::from_segments([0, 0, 0, i64::MAX as u64]);
    q.accumulate(1, 192, false);
    assert!(q.is_nar());

    let mut q = Q::from_segments([0, 0, 0, 1 << 63 | 1]);
    q.accumulate(1, 193, true);
    assert!(q.is_nar());
  }

  #[test]
  fn spill_is_nar() {
    let mut q = Q::ZERO;
    q.accumulate(1 << 100, 200, false);
    assert!(q.is_nar());
  }

  #[test]
  fn nar_absorbs() {
    let mut q = Q::NAR;
    q.accumulate(1, 0, false);
    assert!(q.is_nar());
    q.accumulate(u128::MAX, 100, true);
    assert!(q.is_nar());
  }

  #[test]
  fn decoded() {
    let mut q = Q::ZERO;
    // 1.5
    q.accumulate_decoded(Decoded { sign: false, scale: 0, frac: 0b11 }, false);
    assert_eq!(q.segments(), &[0, 0b11 << (Q::FRACTION_WIDTH - 1 - 64), 0, 0]);
    // 1.5 - 3 × 0.5 = 0
    q.accumulate_product(
      Decoded { sign: false, scale: 1, frac: 0b11 },
      Decoded { sign: true, scale: -1, frac: 0b1 },
      false,
    );
    assert_eq!(q, Q::ZERO);
  }
}
