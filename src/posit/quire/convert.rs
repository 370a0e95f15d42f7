use super::*;
use crate::RoundFrom;

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> Quire<N, ES, LIMBS> {
  /// Aux function: the 128 bits of `self` starting at bit `low` (bits beyond the end of the quire
  /// read as 0), plus whether any bit below `low` is 1.
  fn window(&self, low: u32) -> (u128, bool) {
    let index = (low / 64) as usize;
    let bits = low % 64;
    let segment = |i: usize| self.0.get(i).copied().unwrap_or(0) as u128;

    let window = (segment(index) | segment(index + 1) << 64) >> bits;
    let window = if bits == 0 { window } else { window | segment(index + 2) << (128 - bits) };

    let below = segment(index) & ((1 << bits) - 1) != 0;
    let sticky = below || self.0[.. index.min(LIMBS)].iter().any(|&x| x != 0);
    (window, sticky)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
  const LIMBS: usize,
> RoundFrom<&'_ Quire<N, ES, LIMBS>> for Posit<N, ES, Word> {
  /// Round a quire back to a posit. This is the final step to do after a series of calculations in
  /// the quire, and the *only* step that actually rounds.
  ///
  /// Standard: "**qToP**".
  fn round_from(value: &'_ Quire<N, ES, LIMBS>) -> Self {
    if value.is_nar() { return Self::NAR }
    if value.is_zero() { return Self::ZERO }

    // Work with the absolute value. This is a copy, `value` itself is never touched.
    let sign = value.is_negative();
    let magnitude = if sign { -value.clone() } else { value.clone() };

    // Find the most significant 1. If it is at position `p` (i.e. bit `p - 1`), then it has
    // weight 2^(p - 1 - FRACTION_WIDTH), which is the scale. It becomes the hidden bit of a
    // `frac` made of up to 128 bits from `p` downwards; any 1s further down the quire are
    // collected in the sticky bit.
    //
    //   quire: 0000000000000000000000001|0110101001110101…|0011101011
    //                                   [frac             ][sticky
    let position = Quire::<N, ES, LIMBS>::BITS - magnitude.leading_run();
    let low = position.saturating_sub(128);
    let (frac, sticky) = magnitude.window(low);
    let scale = position as i32 - 1 - Quire::<N, ES, LIMBS>::FRACTION_WIDTH as i32;

    Decoded { sign, scale, frac }.encode_round(sticky)
  }
}

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
  const LIMBS: usize,
> From<Posit<N, ES, Word>> for Quire<N, ES, LIMBS> {
  /// Create a quire from a posit value. This is always exact.
  ///
  /// Standard: "**pToQ**".
  fn from(value: Posit<N, ES, Word>) -> Self {
    let mut quire = Self::ZERO;
    quire.add_posit(value);
    quire
  }
}
