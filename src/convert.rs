//! Explicit truncating and rounding conversions.
//!
//! Narrowing an integer keeps its low bits, exactly as an `as` cast does, so
//! the result is a reinterpretation rather than a clamped value. Converting a
//! float to an integer either discards the fraction (truncation toward zero)
//! or rounds half away from zero.
//!
//! Float conversions come in two flavours. The checked ones return a
//! [`ConversionError`] for NaN, infinities, and values outside the range of the
//! target type. The total ones, [`round_to_nearest_integer()`] and the
//! `saturating_*` functions, follow the semantics of an `as` cast: NaN becomes
//! zero, and anything out of range is clamped to the nearest bound.



//		Modules

#[cfg(test)]
#[path = "tests/convert.rs"]
mod tests;



//		Packages

use crate::{
	bounds::Bounded,
	errors::ConversionError,
	float::{Classification, Classify},
};



//		Traits

//		Truncate																
/// Narrowing conversion by bit-pattern truncation.
///
/// The high-order bits that do not fit are discarded, and the remaining low
/// bits are reinterpreted as a signed two's-complement value. For example,
/// `0x0123_4567_i32` truncates to `0x4567_i16`, and `0x0001_8000_i32` truncates
/// to `i16::MIN`, as bit 15 becomes the sign bit.
///
/// Values that already fit in the target type are returned unchanged, and
/// truncating to the same type is the identity.
///
pub trait Truncate<T> {
	//		truncate															
	/// Keeps the low bits of the value that fit in `T`.
	fn truncate(self) -> T;
}

/// Implements [`Truncate`] for narrowing from one integer to others.
macro_rules! impl_truncate {
	($from:ty => $($to:ty),+) => {
		$(
			impl Truncate<$to> for $from {
				#[expect(clippy::cast_possible_truncation, reason = "Intentional")]
				fn truncate(self) -> $to {
					self as $to
				}
			}
		)+
	};
}

/// Implements [`Truncate`] from a type to itself.
macro_rules! impl_truncate_identity {
	($($t:ty),+) => {
		$(
			impl Truncate<$t> for $t {
				fn truncate(self) -> $t {
					self
				}
			}
		)+
	};
}

impl_truncate!(i64 => i32, i16, i8);
impl_truncate!(i32 => i16, i8);
impl_truncate!(i16 => i8);
impl_truncate_identity!(i8, i16, i32, i64);



//		Functions

//		float_to_int															
/// Converts an integral float to an integer, checking it is in range.
fn float_to_int<T: Bounded>(value: f64) -> Result<T, ConversionError> {
	match value.classify_special() {
		Classification::NotANumber => return Err(ConversionError::NotANumber),
		Classification::Infinite   => return Err(ConversionError::Infinite),
		Classification::Finite     => {},
	}
	//	The minimum is -2^(n-1), which is exact as a float, and the first value
	//	above the maximum is its negation
	#[expect(clippy::cast_precision_loss, reason = "Powers of two are exact")]
	let min = T::MIN.to_i128() as f64;
	if value < min {
		Err(ConversionError::ValueTooSmall)
	} else if value >= -min {
		Err(ConversionError::ValueTooLarge)
	} else {
		#[expect(clippy::cast_possible_truncation, reason = "Already checked")]
		let whole = value as i128;
		T::narrow_from_i128(whole).ok_or(ConversionError::ValueTooLarge)
	}
}

//		round_float_to															
/// Rounds a float to the nearest integer of the given type.
///
/// Ties round half away from zero, so `2.5` becomes `3` and `-2.5` becomes
/// `-3`.
///
/// # Parameters
///
/// * `value` - The value to round. Both [`f32`] and [`f64`] are accepted.
///
/// # Errors
///
/// Returns [`ConversionError::NotANumber`] or [`ConversionError::Infinite`] for
/// non-finite values, and [`ConversionError::ValueTooLarge`] or
/// [`ConversionError::ValueTooSmall`] if the rounded value does not fit in `T`.
///
pub fn round_float_to<T: Bounded>(value: impl Into<f64>) -> Result<T, ConversionError> {
	float_to_int(value.into().round())
}

//		round_to_nearest_integer												
/// Rounds a float to the nearest 64-bit integer, with ties away from zero.
///
/// For example, `2.75` becomes `3`, `2.5` becomes `3`, and `-2.5` becomes
/// `-3`. This always returns a value: anything beyond the range of an [`i64`]
/// (including the infinities) saturates to [`i64::MIN`] or [`i64::MAX`], and
/// NaN becomes `0`. Use [`round_float_to()`] to have those cases reported as
/// errors instead.
///
/// # Parameters
///
/// * `value` - The value to round.
///
#[expect(clippy::cast_possible_truncation, reason = "Saturation is the intent")]
#[must_use]
pub fn round_to_nearest_integer(value: f64) -> i64 {
	value.round() as i64
}

//		saturating_truncate_float												
/// Truncates a float toward zero into a 32-bit integer, saturating at the
/// bounds.
///
/// NaN becomes `0`, values beyond [`i32::MAX`] (including positive infinity)
/// become [`i32::MAX`], and values beyond [`i32::MIN`] become [`i32::MIN`].
///
/// # Parameters
///
/// * `value` - The value to truncate. Both [`f32`] and [`f64`] are accepted.
///
#[expect(clippy::cast_possible_truncation, reason = "Saturation is the intent")]
#[must_use]
pub fn saturating_truncate_float(value: impl Into<f64>) -> i32 {
	value.into() as i32
}

//		truncate																
/// Truncates a 32-bit integer to 16 bits, keeping the low bits.
///
/// See [`Truncate`] for the semantics.
///
/// # Parameters
///
/// * `value` - The value to truncate.
///
#[must_use]
pub fn truncate(value: i32) -> i16 {
	value.truncate()
}

//		truncate_float															
/// Truncates a float toward zero into a 32-bit integer.
///
/// The fractional part is discarded without rounding, so `2.75` becomes `2`
/// and `-2.75` becomes `-2`.
///
/// # Parameters
///
/// * `value` - The value to truncate. Both [`f32`] and [`f64`] are accepted.
///
/// # Errors
///
/// Returns [`ConversionError::NotANumber`] or [`ConversionError::Infinite`] for
/// non-finite values, and [`ConversionError::ValueTooLarge`] or
/// [`ConversionError::ValueTooSmall`] if the truncated value does not fit in an
/// [`i32`].
///
pub fn truncate_float(value: impl Into<f64>) -> Result<i32, ConversionError> {
	truncate_float_to(value)
}

//		truncate_float_to														
/// Truncates a float toward zero into an integer of the given type.
///
/// # Parameters
///
/// * `value` - The value to truncate. Both [`f32`] and [`f64`] are accepted.
///
/// # Errors
///
/// Returns [`ConversionError::NotANumber`] or [`ConversionError::Infinite`] for
/// non-finite values, and [`ConversionError::ValueTooLarge`] or
/// [`ConversionError::ValueTooSmall`] if the truncated value does not fit in
/// `T`.
///
pub fn truncate_float_to<T: Bounded>(value: impl Into<f64>) -> Result<T, ConversionError> {
	float_to_int(value.into().trunc())
}

//		truncate_to																
/// Truncates an integer to a narrower (or the same) type, keeping the low bits.
///
/// # Parameters
///
/// * `value` - The value to truncate.
///
#[must_use]
pub fn truncate_to<T, U: Truncate<T>>(value: U) -> T {
	value.truncate()
}
