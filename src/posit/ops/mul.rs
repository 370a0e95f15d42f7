use super::*;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Return the `Decoded` that's the exact result of multiplying `x` and `y`.
  #[inline]
  pub(crate) fn mul_kernel(x: Decoded, y: Decoded) -> Decoded {
    // Multiplying two numbers in the form `frac × 2^(scale - frac_size)` is much easier than
    // adding them. We have
    //
    //   x × y = (x.frac × y.frac) × 2^(x.scale + y.scale - x.frac_size - y.frac_size)
    //
    // Each `frac` has at most 63 bits, so the product fits comfortably in a `u128` and is exact.
    // It has either `x.frac_size + y.frac_size + 1` bits or one more than that (e.g. 1. × 1. = 1.
    // but 1.5 × 1.5 = 2.25), and the scale of its hidden bit moves along accordingly.
    let frac = x.frac * y.frac;
    let carry = frac.most_significant_one_position() - 1 - (x.frac_size() + y.frac_size());
    let scale = x.scale + y.scale + carry as i32;
    Decoded { sign: x.sign != y.sign, scale, frac }
  }

  /// Return the product of `self` and `other`, rounded.
  pub(crate) fn mul(self, other: Self) -> Self {
    if self == Self::NAR || other == Self::NAR {
      Self::NAR
    } else if self == Self::ZERO || other == Self::ZERO {
      Self::ZERO
    } else {
      let a = self.decode_regular();
      let b = other.decode_regular();
      Self::mul_kernel(a, b).encode_round(false)
    }
  }
}

super::mk_ops!{Mul, mul, MulAssign, mul_assign, "Standard: \"**multiplication**\"."}
