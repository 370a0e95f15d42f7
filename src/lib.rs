#![cfg_attr(not(test), no_std)]
//! This crate provides a correct and flexible software implementation of
//! [Posit arithmetic](https://posithub.org/docs/posit_standard-2.pdf), generic over the posit
//! width and exponent width, together with the *quire*: an exact fixed-point accumulator that
//! backs the fused operations (sums, dot products, multiply-add, etc).
//!
//! # Introduction
//!
//! Posits are an alternative floating point format proposed by John Gustafson in 2017, with the
//! first published standard in 2022. A posit has a single zero and a single exception value,
//! **NaR** ("Not a Real"), rather than the signed zeros, infinities, and NaNs of IEEE floats;
//! and its precision tapers, being highest for values close to ±1.
//!
//! The following references are useful if you are not yet familiar with posits:
//!
//!   - [Posit standard](https://posithub.org/docs/posit_standard-2.pdf) (2022)
//!   - [Original extended paper](https://posithub.org/docs/Posits4.pdf) (2017)
//!
//! Every operation here is correctly rounded (round to nearest, ties to even), never overflows to
//! NaR and never underflows to 0. Correctness is ensured via extensive testing against an exact
//! rational oracle.
//!
//! # Usage
//!
//! ```
//! // Use standard posit types, or define your own.
//! # use posit_quire::Posit;
//! use posit_quire::{p8, p16, p32, p64};  // Standard: n bits, 2 exponent bits
//! type MyPosit = Posit<24, 3, u32>;  // Non-standard: 24 bits, 3 exponent bits
//!
//! // Create posits from ints, IEEE floats, constants, or a raw bit representation.
//! # use posit_quire::{RoundFrom, RoundInto};
//! let a = p32::round_from(2.71_f64);
//! let b = p32::round_from(42_i32);
//! let c = p32::from_bits(0x7f001337);
//! let d = p32::MIN_POSITIVE;
//!
//! // Perform basic arithmetic and comparisons with the usual operators.
//! assert!(p16::round_from(2.14_f32) + p16::ONE == 3.14_f32.round_into());
//! assert!(p16::MIN_POSITIVE < 1e-15_f32.round_into());
//!
//! // Convert posits back to ints, IEEE floats, or a raw bit representation.
//! assert_eq!(p8::ONE.to_bits(), 0b01000000);
//! assert_eq!(i32::round_from(b), 42);
//! ```
//!
//! # The quire
//!
//! ```
//! # use posit_quire::*;
//! // Accumulate sums and products exactly, and round only once at the end.
//! let mut quire = q16::ZERO;
//! quire += p16::round_from(1e7);
//! quire.add_product(p16::round_from(0.5), p16::round_from(2));
//! quire -= p16::round_from(1e7);
//! assert_eq!(p16::round_from(&quire), p16::ONE);
//!
//! // Or use the fused operations directly.
//! let v = [p16::ONE, p16::round_from(2), p16::round_from(3)];
//! assert_eq!(q16::fused_dot_product(&v, &v), p16::round_from(14));
//! ```

mod posit;
mod underlying;

pub use posit::Posit;
pub use posit::quire::Quire;
pub use underlying::Word;

/// Standard-defined 8-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p8 = Posit<8, 2, u8>;

/// Standard-defined 16-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p16 = Posit<16, 2, u16>;

/// Standard-defined 32-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p32 = Posit<32, 2, u32>;

/// Standard-defined 64-bit posit (with 2-bit exponent).
#[allow(non_camel_case_types)]
pub type p64 = Posit<64, 2, u64>;

/// Standard-defined 128-bit quire for a [p8].
#[allow(non_camel_case_types)]
pub type q8 = Quire<8, 2, 2>;

/// Standard-defined 256-bit quire for a [p16].
#[allow(non_camel_case_types)]
pub type q16 = Quire<16, 2, 4>;

/// Standard-defined 512-bit quire for a [p32].
#[allow(non_camel_case_types)]
pub type q32 = Quire<32, 2, 8>;

/// Standard-defined 1024-bit quire for a [p64].
#[allow(non_camel_case_types)]
pub type q64 = Quire<64, 2, 16>;

pub use posit::convert::{RoundFrom, RoundInto};

/// Number of cases for each proptest; larger in release mode.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10_0000};
