//! This module contains the underlying machine-word operations needed for the software
//! implementation of posit arithmetic. These are hidden from the end-user, which only sees the
//! sealed [`Word`] trait, implemented for `u8`, `u16`, `u32`, and `u64`.
//!
//! All the heavy lifting of the codec happens in `u128`, which is wide enough to hold the product
//! of the fractions of two 64-bit posits; posit words are only widened into it and narrowed back
//! out of it at the boundary.

/// The trait for the underlying machine types that can be used to hold the bits of a posit (only
/// satisfied by `u8`, `u16`, `u32`, and `u64`).
///
/// This is a *sealed* type.
pub trait Word: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Binary + core::fmt::LowerHex +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  BitOps
{
  const ZERO: Self;
  const ONE: Self;
  const BITS: u32;

  /// Zero-extend `self` to a `u128`.
  fn to_u128(self) -> u128;

  /// Truncate a `u128` to the lowest [`Self::BITS`] bits.
  fn of_u128(x: u128) -> Self;
}

/// Bit-level primitives shared by every unsigned width, including the `u128` working register.
///
/// Bit positions returned and taken by [`most_significant_one_position`] and [`run_length`] are
/// *bit lengths*, i.e. position `p` refers to bit index `p - 1`; bit indices taken by
/// [`set_bit`] and [`clear_bit`] are the usual 0-based ones.
///
/// [`most_significant_one_position`]: BitOps::most_significant_one_position
/// [`run_length`]: BitOps::run_length
/// [`set_bit`]: BitOps::set_bit
/// [`clear_bit`]: BitOps::clear_bit
pub trait BitOps: Copy {
  /// Number of bits needed to represent `self`, i.e. the 1-based position of the most
  /// significant 1 (0 for 0).
  ///
  /// ```ignore
  /// assert_eq!(0b0010_1100_u8.most_significant_one_position(), 6)
  /// ```
  fn most_significant_one_position(self) -> u32;

  /// Length of the run of identical bits starting at position `start` (i.e. at bit index
  /// `start - 1`) and going towards the lsb. Never exceeds `start`.
  ///
  /// ```ignore
  /// assert_eq!(0b0111_0010_u8.run_length(7), 3)
  /// ```
  fn run_length(self, start: u32) -> u32;

  /// Return `self` with bit `index` set to 1.
  fn set_bit(self, index: u32) -> Self;

  /// Return `self` with bit `index` set to 0.
  fn clear_bit(self, index: u32) -> Self;

  /// Two's complement negation, `!self + 1` (wrapping).
  fn twos_complement(self) -> Self;
}

mod word;

mod const_as;
pub use const_as::const_of_u128;
