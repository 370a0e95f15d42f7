use super::*;

use core::cmp::Ordering;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Round `self` to an integer-valued posit. `round_away(sign, odd, dropped, inexact)` decides
  /// whether to bump the magnitude of the truncated integer up by 1, given the sign of `self`,
  /// whether the truncated integer is odd, how the dropped fractional part compares to 1/2, and
  /// whether it is nonzero at all.
  #[inline]
  fn round_integral(self, round_away: impl FnOnce(bool, bool, Ordering, bool) -> bool) -> Self {
    let Ok(x) = self.try_decode() else { return self };

    // Let's split `x.frac` into an `integral` (left of the binary point) and a `dropped` (right
    // of the binary point) part. The hidden bit has weight 2^scale, so the point is `frac_size -
    // scale` places from the right.
    //
    // Examples:
    //
    //         frac: 0b1_1101
    //        scale: +0
    //     integral: 0b1
    //      dropped: 0b1101
    //
    //         frac: 0b1_1101
    //        scale: +2
    //     integral: 0b111
    //      dropped: 0b01
    //
    // If the point is right of the whole fraction, `self` is already an integer. If it is more
    // than one place left of it, `|self| < 1/2`: the integral part is 0, and the dropped part is
    // nonzero and below one half.
    let frac_size = x.frac_size() as i32;
    if x.scale >= frac_size { return self }
    let (integral, dropped, inexact) =
      if x.scale < -1 {
        (0, Ordering::Less, true)
      } else {
        let shift = (frac_size - x.scale) as u32;
        let integral = x.frac >> shift;
        let rest = x.frac & ((1 << shift) - 1);
        (integral, rest.cmp(&(1 << (shift - 1))), rest != 0)
      };

    let integral = integral + u128::from(round_away(x.sign, integral & 1 != 0, dropped, inexact));
    if integral == 0 {
      Self::ZERO
    } else {
      Self::from_parts(x.sign, integral.most_significant_one_position() as i32 - 1, integral)
    }
  }

  /// Returns the integer-valued posit nearest to `self`, and the nearest even integer-valued posit
  /// if two integers are equally near.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(p32::round_from(3.1).nearest_int(), p32::round_from(3));
  /// assert_eq!(p32::round_from(3.5).nearest_int(), p32::round_from(4));
  /// assert_eq!(p32::round_from(2.5).nearest_int(), p32::round_from(2));
  /// assert_eq!(p32::round_from(-3.9).nearest_int(), p32::round_from(-4));
  /// ```
  pub fn nearest_int(self) -> Self {
    self.round_integral(|_, odd, dropped, _| {
      dropped == Ordering::Greater || (dropped == Ordering::Equal && odd)
    })
  }

  /// Returns the largest integer-valued posit less than or equal to `self`.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(p32::round_from(3.9).floor(), p32::round_from(3));
  /// assert_eq!(p32::round_from(-3.1).floor(), p32::round_from(-4));
  /// assert_eq!(p32::round_from(-0.1).floor(), p32::MINUS_ONE);
  /// ```
  pub fn floor(self) -> Self {
    self.round_integral(|sign, _, _, inexact| sign && inexact)
  }

  /// Returns the smallest integer-valued posit greater than or equal to `self`.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// assert_eq!(p32::round_from(3.1).ceil(), p32::round_from(4));
  /// assert_eq!(p32::round_from(-3.9).ceil(), p32::round_from(-3));
  /// assert_eq!(p32::round_from(-0.1).ceil(), p32::ZERO);
  /// ```
  pub fn ceil(self) -> Self {
    self.round_integral(|sign, _, _, inexact| !sign && inexact)
  }
}
