use super::*;

// The `Word` trait has bounds indirectly, via `Sealed`. For example, we don't have `Word:
// PartialEq`, we have `Word: Sealed` and `Sealed: PartialEq`, so the derive macro derives
//
//   impl<const N: u32, const ES: u32, Word: PartialEq + Word> PartialEq for Posit<N, ES, Word>
//
// but of course we know we can just have
//
//   impl<const N: u32, const ES: u32, Word: Word> PartialEq for Posit<N, ES, Word>
//
// Because of that we just implement explicitly here. Ord could not be derived in any case: the
// word is unsigned, and posits are ordered like the *signed* two's complement integers with the
// same bits.

impl<const N: u32, const ES: u32, Word: crate::Word>
Clone for Posit<N, ES, Word> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const N: u32, const ES: u32, Word: crate::Word>
Copy for Posit<N, ES, Word> {}

impl<const N: u32, const ES: u32, Word: crate::Word>
PartialEq for Posit<N, ES, Word> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}

impl<const N: u32, const ES: u32, Word: crate::Word>
Eq for Posit<N, ES, Word> {}

impl<const N: u32, const ES: u32, Word: crate::Word>
PartialOrd for Posit<N, ES, Word> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

/// Posits are totally ordered, and the order is that of their bit patterns read as `N`-bit two's
/// complement integers. In particular [NaR](Posit::NAR) (`0b100…0`, the most negative integer) is
/// less than every other posit, and equal only to itself.
impl<const N: u32, const ES: u32, Word: crate::Word>
Ord for Posit<N, ES, Word> {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.to_ordered().cmp(&other.to_ordered())
  }
}

impl<const N: u32, const ES: u32, Word: crate::Word>
core::hash::Hash for Posit<N, ES, Word> {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

impl<const N: u32, const ES: u32, Word: crate::Word>
Default for Posit<N, ES, Word> {
  /// The default posit is [0](Posit::ZERO).
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}
