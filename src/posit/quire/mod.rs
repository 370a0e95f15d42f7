use super::*;

/// A *quire* for a posit type with `N` bits and `ES` exponent bits, made of `LIMBS` 64-bit
/// segments.
///
/// A quire is a fixed-point accumulator that enables sums and dot products of posits to be
/// calculated with **no** intermediate rounding whatsoever. It is a two's complement number of
/// [`BITS`](Self::BITS) bits, with the binary point [`FRACTION_WIDTH`](Self::FRACTION_WIDTH) bits
/// from the right, which is enough to hold the square of the smallest and the largest posit
/// exactly.
///
/// The `LIMBS` are bounded from below by the minimum size necessary to hold the product of two
/// posits (smaller quires are a compile-time error). Above that, the more extra space, the more
/// terms can be accumulated without risk of overflow (see [`Self::SUM_LIMIT`] and
/// [`Self::PROD_LIMIT`]). Should it overflow anyway, the quire becomes [NaR](Self::NAR).
///
/// Unlike posits, a quire is not `Copy`: it is meant to be created, mutated in place by a series
/// of accumulation operations, and rounded back to a posit once at the end.
///
/// # Examples
///
/// ```
/// # use posit_quire::*;
/// let a = [p32::round_from(1e20), p32::ONE, p32::round_from(-1e20)];
///
/// // Summed with posits, the 1 is lost to rounding.
/// assert_eq!(a[0] + a[1] + a[2], p32::ZERO);
///
/// // Summed in the quire, it is not.
/// let mut quire = q32::ZERO;
/// for x in a { quire += x }
/// assert_eq!(p32::round_from(&quire), p32::ONE);
/// ```
//
// The quire is represented as an array of `u64` segments in little-endian order: segment 0 holds
// the least significant bits, and the sign is the msb of the last segment.
#[derive(Clone)]
#[derive(PartialEq, Eq, Hash)]
pub struct Quire<
  const N: u32,
  const ES: u32,
  const LIMBS: usize,
> ([u64; LIMBS]);

/// Basic constants and functions, such as the position of the fixed point, compile-time checks
/// that `LIMBS` is enough, etc.
mod basics;

/// Debug formatting
mod fmt;

/// The core routine: adding a shifted magnitude to the quire
mod accumulate;

/// In-place arithmetic on the quire, and operator sugar for it
mod ops;

/// Conversions between posits and quires
mod convert;

/// Fused operations: sums, dot products, and multiply-adds with a single rounding
mod fused;
