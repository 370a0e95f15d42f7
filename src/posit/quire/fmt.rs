use super::*;

use core::fmt::Debug;

impl<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> Debug for Quire<N, ES, LIMBS> {
  /// Prints the segments of the quire in hexadecimal, most significant first.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("Quire(0x")?;
    for (i, segment) in self.0.iter().rev().enumerate() {
      if i != 0 { f.write_str("_")? }
      write!(f, "{segment:016x}")?;
    }
    f.write_str(")")
  }
}
