use super::*;
use crate::underlying::const_of_u128;

impl<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> Posit<N, ES, Word> {
  /// Zero (`0`), the additive identity element.
  //
  // Represented by the bit pattern `0b000...0`.
  pub const ZERO: Self = Self(Word::ZERO);

  /// Not-a-real (`NaR`).
  //
  // Represented by the bit pattern `0b1000...0`.
  pub const NAR: Self = Self(const_of_u128(1 << (Self::BITS - 1)));

  /// Largest representable value, equal to `-MIN`.
  //
  // Represented by the bit pattern `0b0111...1`.
  pub const MAX: Self = Self(const_of_u128((1 << (Self::BITS - 1)) - 1));

  /// Smallest representable value, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  //
  // Represented by the bit pattern `0b100...01`.
  pub const MIN: Self = Self(const_of_u128((1 << (Self::BITS - 1)) + 1));

  /// Smallest *positive* value, equal to `-MAX_NEGATIVE`.
  //
  // Represented by the bit pattern `0b000...01`.
  pub const MIN_POSITIVE: Self = Self(Word::ONE);

  /// Largest *negative* value, equal to `-MIN_POSITIVE`.
  //
  // Represented by the bit pattern `0b1111...1`.
  pub const MAX_NEGATIVE: Self = Self(const_of_u128(u128::MAX >> (128 - Self::BITS)));

  /// The minimum exponent; [`Self::MIN_POSITIVE`] = 2 <sup>[`Self::MIN_EXP`]</sup>.
  pub const MIN_EXP: i32 = -Self::MAX_EXP;

  /// The maximum exponent; [`Self::MAX`] = 2 <sup>[`Self::MAX_EXP`]</sup>.
  pub const MAX_EXP: i32 = ((Self::BITS - 2) << Self::ES) as i32;

  /// One (`1`), the multiplicative identity element.
  //
  // Represented by the bit pattern `0b0100...0`.
  pub const ONE: Self = Self(const_of_u128(1 << (Self::BITS - 2)));

  /// Negative one (`-1`).
  //
  // Represented by the bit pattern `0b1100...0`.
  pub const MINUS_ONE: Self = Self(const_of_u128(0b11 << (Self::BITS - 2)));
}
