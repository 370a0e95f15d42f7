use super::*;

/// Used to do value-to-value conversions that may *round* the input (see below). It is the
/// reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], except that, unlike the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_: they round if the target type cannot represent the
/// value exactly.
///
/// The exact meaning of each conversion depends on the types involved; **consult the
/// documentation of the specific implementations of `round_from`**.
///
/// As with [`From`], prefer implementing [`RoundFrom`] over [`RoundInto`], because implementing
/// [`RoundFrom`] automatically provides an implementation of [`RoundInto`], and prefer using
/// [`RoundInto`] over [`RoundFrom`] when specifying trait bounds on a generic function. There's
/// also a blanket implementation of `RoundFrom<T> for T`.
///
/// # Rounding
///
/// When the target is a posit, "rounding" means:
///
///   - If the value is greater in absolute value than the biggest posit, round to it (i.e., never
///     overflow).
///   - If the value is smaller in absolute value than the smallest positive posit, round to it
///     (i.e., never underflow).
///   - Otherwise, round to the nearest bit pattern, or in case of a tie, to the even bit pattern.
///
/// # Examples
///
/// Rounding from ints, floats:
/// ```
/// # use posit_quire::*;
/// assert!(p16::round_from(1) == p16::round_from(1.00000001));
/// assert!(p32::round_from(1) <  p32::round_from(1.00000001));
///
/// assert_eq!(p32::round_from(f64::NAN), p32::NAR);
/// ```
///
/// Rounding to ints, floats:
/// ```
/// # use posit_quire::*;
/// assert_eq!(f32::round_from(p16::MIN_POSITIVE), 1.3877788e-17);
/// assert_eq!(i64::round_from(p8::MAX), 1 << 24);
///
/// assert!(f64::round_from(p32::NAR).is_nan());
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)). If you're looking for the usual Rust-y conversions
  /// ([`From`] if exact, [`TryFrom`] if fallible), use those traits instead.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`], which see for details.
///
/// # Examples
///
/// ```
/// # use posit_quire::*;
/// assert_eq!(p16::ONE.next(), 1.0004883_f64.round_into());
/// assert_eq!(p32::ONE.next(), 1.0000000075_f64.round_into());
///
/// assert_eq!(5.960464477539063e-8, p8::MIN_POSITIVE.round_into());
/// assert_eq!(1_i64 << 56, p16::MAX.round_into());
///
/// assert!(f64::is_nan(p32::NAR.round_into()));
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

/// IEEE floats (`f32`, `f64`)
mod float;

/// Native integers (`i8`‥`i128`, `u8`‥`u128`)
mod int;

/// Posits of other sizes
mod posit;
