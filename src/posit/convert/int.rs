use super::*;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Round a nonzero integer magnitude `abs` (negated if `sign`) to a posit.
  ///
  /// The integer is already in the form we need: its most significant 1 is the hidden bit, and it
  /// has weight `2^(msb - 1)`, which is the scale.
  #[inline]
  fn round_from_magnitude(sign: bool, abs: u128) -> Self {
    debug_assert!(abs != 0);
    let scale = abs.most_significant_one_position() as i32 - 1;
    Decoded { sign, scale, frac: abs }.encode_round(false)
  }

  /// The magnitude of `self` truncated towards zero, as a `u128`, or `None` if it does not fit in
  /// one. `self` must not be 0 or NaR.
  #[inline]
  fn truncated_magnitude(x: Decoded) -> Option<u128> {
    if x.scale < 0 {
      // |x| < 1
      Some(0)
    } else if x.scale >= 128 {
      None
    } else {
      // The hidden bit ends up at bit `scale`, which is < 128, so the left shift cannot overflow.
      let frac_size = x.frac_size() as i32;
      Some(if x.scale <= frac_size {
        x.frac >> (frac_size - x.scale)
      } else {
        x.frac << (x.scale - frac_size)
      })
    }
  }
}

macro_rules! make_impl {
  ($signed:ty, $unsigned:ty) => {
    impl<
      const N: u32,
      const ES: u32,
      Word: crate::Word,
    > RoundFrom<$signed> for Posit<N, ES, Word> {
      #[doc = concat!("Convert an `", stringify!($signed), "` into a `Posit`, rounding:")]
      ///
      /// - 0 converts to [0](Posit::ZERO).
      /// - Otherwise, the integer is rounded to the nearest posit (if necessary). This includes
      #[doc = concat!("  [`", stringify!($signed), "::MIN`], whose magnitude fits in a `", stringify!($unsigned), "`.")]
      fn round_from(value: $signed) -> Self {
        if value == 0 {
          Self::ZERO
        } else {
          Self::round_from_magnitude(value < 0, value.unsigned_abs() as u128)
        }
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Word: crate::Word,
    > RoundFrom<$unsigned> for Posit<N, ES, Word> {
      #[doc = concat!("Convert a `", stringify!($unsigned), "` into a `Posit`, rounding:")]
      ///
      /// - 0 converts to [0](Posit::ZERO).
      /// - Otherwise, the integer is rounded to the nearest posit (if necessary).
      fn round_from(value: $unsigned) -> Self {
        if value == 0 {
          Self::ZERO
        } else {
          Self::round_from_magnitude(false, value as u128)
        }
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Word: crate::Word,
    > RoundFrom<Posit<N, ES, Word>> for $signed {
      #[doc = concat!("Convert a `Posit` into an `", stringify!($signed), "`, rounding:")]
      ///
      #[doc = concat!("- [NaR](Posit::NAR) converts to [`", stringify!($signed), "::MIN`].")]
      /// - Otherwise, the value is rounded towards zero, and saturates to the nearest bound if it
      ///   is out of the range of the integer type.
      fn round_from(value: Posit<N, ES, Word>) -> Self {
        let x = match value.try_decode() {
          Ok(x) => x,
          Err(special) => return if special == Posit::ZERO { 0 } else { <$signed>::MIN },
        };
        let magnitude = Posit::<N, ES, Word>::truncated_magnitude(x);
        if x.sign {
          match magnitude {
            Some(m) if m <= <$signed>::MIN.unsigned_abs() as u128 => (m as $signed).wrapping_neg(),
            _ => <$signed>::MIN,
          }
        } else {
          match magnitude {
            Some(m) if m <= <$signed>::MAX as u128 => m as $signed,
            _ => <$signed>::MAX,
          }
        }
      }
    }

    impl<
      const N: u32,
      const ES: u32,
      Word: crate::Word,
    > RoundFrom<Posit<N, ES, Word>> for $unsigned {
      #[doc = concat!("Convert a `Posit` into a `", stringify!($unsigned), "`, rounding:")]
      ///
      /// - [NaR](Posit::NAR) and negative numbers convert to 0.
      /// - Otherwise, the value is rounded towards zero, and saturates to the largest integer if
      ///   it is out of range.
      fn round_from(value: Posit<N, ES, Word>) -> Self {
        let x = match value.try_decode() {
          Ok(x) if !x.sign => x,
          _ => return 0,
        };
        match Posit::<N, ES, Word>::truncated_magnitude(x) {
          Some(m) if m <= <$unsigned>::MAX as u128 => m as $unsigned,
          _ => <$unsigned>::MAX,
        }
      }
    }
  }
}

make_impl!{i8, u8}
make_impl!{i16, u16}
make_impl!{i32, u32}
make_impl!{i64, u64}
make_impl!{i128, u128}
