use super::*;

/// One line of the [`const_of_u128`] function.
macro_rules! const_of_u128_line {
  ($x:ident, $t:ty) => {
    if const { W::BITS == <$t>::BITS } {
      let t = $x as $t;
      // SAFETY: `W` is sealed to `u8`, `u16`, `u32`, `u64`, each with a distinct bit width, so
      // `$t` is `W` and the transmute_copy is a no-op.
      return unsafe { ::core::mem::transmute_copy::<$t, W>(&t) }
    }
  }
}

/// A type-generic and `const` version of `x as W`, truncating a `u128` to a [`Word`]. Needed to
/// build the posit constants at compile time, since trait methods cannot be called in `const`
/// contexts.
///
/// ```ignore
/// assert_eq!(const_of_u128::<u16>(0x1_4000), 0x4000_u16);
/// ```
pub const fn const_of_u128<W: Word>(x: u128) -> W {
  const_of_u128_line!(x, u8);
  const_of_u128_line!(x, u16);
  const_of_u128_line!(x, u32);
  const_of_u128_line!(x, u64);
  unreachable!()
}
