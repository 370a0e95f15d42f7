use super::*;

/// The bit at which both fractions are lined up before adding them. Leaves two bits of headroom
/// at the top of the `u128`, so that the sum of two fractions can never overflow.
const TOP: u32 = 125;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Return the `Decoded` that is the result of adding `x` and `y`, plus the sticky bit, or
  /// `None` if the result is exactly 0.
  #[inline]
  pub(crate) fn add_kernel(x: Decoded, y: Decoded) -> Option<(Decoded, bool)> {
    // Put the hidden bit of both fractions at bit `TOP`. A posit fraction has fewer than 64 bits,
    // so this only ever shifts left.
    let x = Decoded { frac: x.frac << (TOP - x.frac_size()), ..x };
    let y = Decoded { frac: y.frac << (TOP - y.frac_size()), ..y };

    // Make `x` the one with the larger magnitude; with the hidden bits lined up, the magnitudes
    // compare like the pairs `(scale, frac)`.
    let (x, y) = if (x.scale, x.frac) >= (y.scale, y.frac) { (x, y) } else { (y, x) };

    // Now align `y` to `x`, by shifting it right by the difference in scales. The bits of `y`
    // that fall off the end are not lost: they are remembered in the sticky bit.
    //
    //   x.frac = 01xxxxxxxxxxxxxx…
    //   y.frac = 0000001yyyyyyyyy|yyy
    //            ╰shift╯         ╰lost
    //
    // The shift can be more than 128 places, in which case all of `y` is lost.
    let shift = (x.scale - y.scale) as u32;
    let yfrac = y.frac.checked_shr(shift).unwrap_or(0);
    let lost = yfrac.checked_shl(shift).unwrap_or(0) != y.frac;

    // Adding two numbers with the same sign: the magnitudes add. There is always room for the
    // carry, thanks to the headroom above `TOP`.
    //
    // Adding two numbers with opposite signs: the magnitudes subtract, and the sign is that of
    // `x`. If some of `y` was lost, the true difference is a bit *less* than `x.frac - yfrac`,
    // which we express as `x.frac - yfrac - 1` plus a sticky remainder. This cannot underflow:
    // bits are only lost if `y` is shifted quite far right, in which case `yfrac` is far smaller
    // than `x.frac`.
    let frac =
      if x.sign == y.sign {
        x.frac + yfrac
      } else {
        x.frac - yfrac - u128::from(lost)
      };

    // Equal magnitudes and opposite signs: the result is exactly 0.
    if frac == 0 { return None }

    // The result is now `frac × 2^(x.scale - TOP)`: the hidden bit may have moved up (by a carry)
    // or down (by a cancellation) from `TOP`, and the scale follows it.
    let scale = x.scale + frac.most_significant_one_position() as i32 - 1 - TOP as i32;
    Some((Decoded { sign: x.sign, scale, frac }, lost))
  }

  /// Return the sum of `self` and `other`, rounded.
  pub(crate) fn add(self, other: Self) -> Self {
    match (self.try_decode(), other.try_decode()) {
      (Err(x), Err(y)) => if x == Self::NAR || y == Self::NAR { Self::NAR } else { Self::ZERO },
      (Err(x), Ok(_)) => if x == Self::NAR { Self::NAR } else { other },
      (Ok(_), Err(y)) => if y == Self::NAR { Self::NAR } else { self },
      (Ok(x), Ok(y)) => match Self::add_kernel(x, y) {
        Some((result, sticky)) => result.encode_round(sticky),
        None => Self::ZERO,
      },
    }
  }

  /// Return the difference of `self` and `other`, rounded.
  pub(crate) fn sub(self, other: Self) -> Self {
    self.add(-other)
  }
}

super::mk_ops!{Add, add, AddAssign, add_assign, "Standard: \"**addition**\"."}
super::mk_ops!{Sub, sub, SubAssign, sub_assign, "Standard: \"**subtraction**\"."}
