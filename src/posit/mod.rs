//! This module and its submodules contain a software implementation of a Posit floating point
//! type, generic over the width `N` (up to 64) and the exponent width `ES`, plus the quire
//! accumulator that backs the fused operations.
//!
//! The codec is written around a single idea: a posit that is not 0 or NaR is decoded into a
//! [`Decoded`] triple `(sign, scale, frac)`, every operation works on those triples in a wide
//! (`u128`) register, and exactly one routine,
//! [`assemble_with_rounding`](Posit::assemble_with_rounding), turns the result back into an
//! `N`-bit word, rounding once. Everything is explained in the comments as we go; we assume basic
//! familiarity with the posit format and with two's complement integer arithmetic.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!   - **Position p**: a 1-based bit length, i.e. position `p` is bit `p-1`. Used by
//!     [`BitOps`](crate::underlying::BitOps).

use crate::underlying::{BitOps, Sealed};

/// A Posit floating point number with `N` bits and `ES` exponent bits, stored in the low `N` bits
/// of a `Word` (the remaining high bits, if any, are always 0).
///
/// The bit layout is the standard one: the whole word is a two's complement number whose sign is
/// bit `N-1`; the absolute value holds, from the left, the regime, up to `ES` exponent bits, and
/// the fraction. Its value is `(-1)^sign × 2^(k × 2^ES + exponent) × 1.fraction`.
///
/// Examples:
///
/// ```
/// # use posit_quire::Posit;
/// type Foo = Posit::<32, 2, u32>;  // A 32-bit posit with 2-bit exponent field, held in a
///                                  // 32-bit machine type
/// type Bar = Posit::<6, 1, u8>;  // A 6-bit posit with 1-bit exponent field, held in an
///                                // 8-bit machine type.
/// ```
pub struct Posit<
  const N: u32,
  const ES: u32,
  Word: crate::Word,
> (Word);

/// A posit which is not 0 or NaR, decomposed into its sign, its binary scale factor, and its
/// fraction with the hidden bit.
///
/// The value represented is `(-1)^sign × frac × 2^(scale - (msb(frac) - 1))`: that is, the most
/// significant 1 of `frac` is the hidden bit, and sits at the binary point; everything below it
/// is fraction. `frac` is not required to have any particular width, which is what lets the
/// kernels of the arithmetic operations hand over an exact (wide) result to the encoder without
/// any preliminary rounding.
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq)]
pub(crate) struct Decoded {
  /// Whether the value is negative.
  pub sign: bool,
  /// The binary exponent of the hidden bit, `k × 2^ES + exponent`.
  pub scale: i32,
  /// The fraction, hidden bit included. Never 0.
  pub frac: u128,
}

impl Decoded {
  /// The width of the fraction, *not* counting the hidden bit.
  #[inline]
  pub(crate) fn frac_size(self) -> u32 {
    self.frac.most_significant_one_position() - 1
  }
}

/// Basics
mod basics;

/// Constants (zero, min, min_positive, etc)
mod consts;

/// Manual impls of Clone, Copy, Eq, Ord, Hash, Default
mod traits;

/// Debug formatting
mod fmt;

/// Extracting the regime, exponent, and fraction fields out of a posit word
mod decode;

/// Assembling a posit word out of its fields, with rounding
mod encode;

/// Negation, absolute value, next, prior
mod unary;

/// Add, sub, mul, div
mod ops;

/// Square root
mod math;

/// Rounding to integral values
mod round_int;

/// Conversions to and from integers, IEEE floats, and other posit types
pub mod convert;

/// The quire accumulator and the fused operations
pub mod quire;


/// Exact conversion to rationals, used as a test oracle
#[cfg(test)]
mod rational;
