use super::*;

macro_rules! impl_bit_ops {
  ($uint:ty) => {
    impl BitOps for $uint {
      #[inline]
      fn most_significant_one_position(self) -> u32 {
        Self::BITS - self.leading_zeros()
      }

      #[inline]
      fn run_length(self, start: u32) -> u32 {
        debug_assert!(start <= Self::BITS);
        if start == 0 { return 0 }
        // Move bit `start - 1` to the msb; the bits shifted in from the right are 0s, so a run of
        // 1s is cut short by them, and a run of 0s is capped by the `min` below.
        let aligned = self << (Self::BITS - start);
        let run =
          if aligned >> (Self::BITS - 1) == 1 {
            aligned.leading_ones()
          } else {
            aligned.leading_zeros()
          };
        run.min(start)
      }

      #[inline]
      fn set_bit(self, index: u32) -> Self {
        self | (1 << index)
      }

      #[inline]
      fn clear_bit(self, index: u32) -> Self {
        self & !(1 << index)
      }

      #[inline]
      fn twos_complement(self) -> Self {
        (!self).wrapping_add(1)
      }
    }
  }
}

macro_rules! impl_word {
  ($uint:ty) => {
    impl Word for $uint {}

    impl Sealed for $uint {
      const ZERO: Self = 0;
      const ONE: Self = 1;
      const BITS: u32 = Self::BITS;

      #[inline]
      fn to_u128(self) -> u128 {
        self as u128
      }

      #[inline]
      fn of_u128(x: u128) -> Self {
        x as $uint
      }
    }
  }
}

impl_bit_ops!{u8}
impl_bit_ops!{u16}
impl_bit_ops!{u32}
impl_bit_ops!{u64}
impl_bit_ops!{u128}

impl_word!{u8}
impl_word!{u16}
impl_word!{u32}
impl_word!{u64}
