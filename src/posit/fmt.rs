use super::*;

use core::fmt::Debug;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Debug for Posit<N, ES, Word> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    f.debug_tuple("Posit")
      .field(&format_args!("0b{bits:0w$b}", w=Self::BITS as usize))
      .finish()
  }
}

impl Debug for Decoded {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let sign = if self.sign {'-'} else {'+'};
    let frac_size = self.frac_size() as usize;
    let frac_explicit = self.frac.clear_bit(frac_size as u32);
    let scale = self.scale;
    if frac_size == 0 {
      f.debug_struct("Decoded")
        .field("sign", &format_args!("{sign}"))
        .field("scale", &format_args!("{scale:+}"))
        .field("frac", &format_args!("0b1"))
        .finish()
    } else {
      f.debug_struct("Decoded")
        .field("sign", &format_args!("{sign}"))
        .field("scale", &format_args!("{scale:+}"))
        .field("frac", &format_args!("0b1_{frac_explicit:0w$b}", w=frac_size))
        .finish()
    }
  }
}
