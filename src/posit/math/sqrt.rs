use super::*;

/// Integer square root of `x` by the bit-by-bit restoring method: returns `(root, rem)` with
/// `root = ⌊√x⌋` and `rem = x - root²`.
///
/// This determines the root one bit at a time, from the most significant down. At each step
/// `bit` is the square of the candidate root bit, and the candidate is kept if the remainder can
/// pay for it, or *restored* (dropped) if it can't.
fn restoring_sqrt(x: u128) -> (u128, u128) {
  let mut rem = x;
  let mut root = 0u128;
  // The largest power of 4 not exceeding `x`.
  let mut bit = match x.most_significant_one_position() {
    0 => 0,
    msb => 1 << ((msb - 1) & !1),
  };
  while bit != 0 {
    if rem >= root + bit {
      rem -= root + bit;
      root = (root >> 1) + bit;
    } else {
      root >>= 1;
    }
    bit >>= 2;
  }
  (root, rem)
}

/// The bit at which the hidden bit of the radicand is placed (or one above, for an odd scale).
const RADICAND_TOP: u32 = 124;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Return the `Decoded` that is the result of √x, plus the sticky bit. `x` must be positive.
  #[inline]
  pub(crate) fn sqrt_kernel(x: Decoded) -> (Decoded, bool) {
    debug_assert!(!x.sign);
    // Taking the square root of a number in the form `frac × 2^exp` has two steps.
    //
    // First, ensure that `exp` is an even number. We move the hidden bit of the fraction up to
    // `RADICAND_TOP`, or one place further if the scale is odd, so that
    //
    //   x = radicand × 2^(x.scale - odd - RADICAND_TOP)
    //
    // where the exponent is now even.
    //
    // Then, the square root is easy.
    //
    //   √x = √radicand × 2^((x.scale - odd) / 2 - RADICAND_TOP / 2)
    //
    // The radicand has its hidden bit at bit 124 or 125, so the root has it at bit 62 (i.e.
    // RADICAND_TOP / 2), which puts the scale of the result at exactly `(x.scale - odd) / 2`. A
    // nonzero remainder means the root was not exact, which goes into the sticky bit.
    let odd = (x.scale & 1) as u32;
    let radicand = x.frac << (RADICAND_TOP - x.frac_size() + odd);
    let (frac, rem) = restoring_sqrt(radicand);
    debug_assert_eq!(frac.most_significant_one_position() - 1, RADICAND_TOP / 2);
    let scale = (x.scale - odd as i32) >> 1;
    (Decoded { sign: false, scale, frac }, rem != 0)
  }

  /// Returns the square root of `self`, rounded. If `self` is negative or [NaR](Self::NAR),
  /// returns NaR.
  ///
  /// # Example
  ///
  /// ```
  /// # use posit_quire::*;
  /// type P = Posit<16, 0, u16>;
  /// assert_eq!(P::from_bits(0x7000).sqrt(), P::from_bits(0x6000));  // √4 = 2
  /// assert_eq!(p16::round_from(2.25_f64).sqrt(), p16::round_from(1.5_f64));
  /// assert_eq!(p16::MINUS_ONE.sqrt(), p16::NAR);
  /// ```
  pub fn sqrt(self) -> Self {
    if self.is_negative() {
      Self::NAR
    } else if self == Self::ZERO {
      Self::ZERO
    } else {
      let x = self.decode_regular();
      let (result, sticky) = Self::sqrt_kernel(x);
      result.encode_round(sticky)
    }
  }
}
