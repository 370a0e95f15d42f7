use super::*;

/// The bit at which the hidden bit of the dividend is placed before dividing.
const DIVIDEND_TOP: u32 = 126;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Return the `Decoded` that's the result of dividing `x` by `y`, plus the sticky bit.
  #[inline]
  pub(crate) fn div_kernel(x: Decoded, y: Decoded) -> (Decoded, bool) {
    // Let's use ÷ to denote true mathematical division, and / denote integer division (that
    // rounds down). To divide two numbers in the form `frac × 2^(scale - frac_size)`, we first
    // move the hidden bit of the dividend all the way up to bit `DIVIDEND_TOP`, giving
    //
    //   x = (x.frac << (DIVIDEND_TOP - x.frac_size)) × 2^(x.scale - DIVIDEND_TOP)
    //
    // and then
    //
    //   x ÷ y = (dividend ÷ y.frac) × 2^(x.scale - DIVIDEND_TOP - y.scale + y.frac_size)
    //
    // The integer quotient `dividend / y.frac` has at least `DIVIDEND_TOP - 63` bits, which is
    // far more than any posit can hold, and whatever is left in the remainder only matters as a
    // sticky bit.
    let dividend = x.frac << (DIVIDEND_TOP - x.frac_size());
    let frac = dividend / y.frac;
    let sticky = dividend % y.frac != 0;
    let exp = x.scale - y.scale + y.frac_size() as i32 - DIVIDEND_TOP as i32;
    let scale = exp + frac.most_significant_one_position() as i32 - 1;
    (Decoded { sign: x.sign != y.sign, scale, frac }, sticky)
  }

  /// Return the quotient of `self` and `other`, rounded. Division by 0 gives NaR.
  pub(crate) fn div(self, other: Self) -> Self {
    if self == Self::NAR || other == Self::NAR || other == Self::ZERO {
      Self::NAR
    } else if self == Self::ZERO {
      Self::ZERO
    } else {
      let a = self.decode_regular();
      let b = other.decode_regular();
      let (result, sticky) = Self::div_kernel(a, b);
      result.encode_round(sticky)
    }
  }
}

super::mk_ops!{Div, div, DivAssign, div_assign, "Standard: \"**division**\". Division by 0 is NaR."}
