//! Classification of IEEE-754 special values.



//		Modules

#[cfg(test)]
#[path = "tests/float.rs"]
mod tests;



//		Packages

use core::fmt::{Display, Formatter, self};
use serde::{Deserialize, Serialize};



//		Constants

/// Exponent bits of an [`f32`].
const F32_EXPONENT_MASK: u32 = 0x7F80_0000;

/// Mantissa bits of an [`f32`].
const F32_MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Exponent bits of an [`f64`].
const F64_EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;

/// Mantissa bits of an [`f64`].
const F64_MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;



//		Enums

//		Classification															
/// The kind of value held by an IEEE-754 floating-point number.
///
/// This only distinguishes the special values from the ordinary ones. Zero and
/// subnormal numbers are both [`Finite`](Classification::Finite); the sign is
/// not considered.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
	/// Any value that is neither infinite nor NaN, including zero.
	Finite,
	
	/// Positive or negative infinity, e.g. `1.0 / 0.0`.
	Infinite,
	
	/// Not a number, e.g. `0.0 / 0.0`.
	NotANumber,
}

//󰭅		Display																	
impl Display for Classification {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match *self {
			Self::Finite     => "finite",
			Self::Infinite   => "infinite",
			Self::NotANumber => "not a number",
		})
	}
}

//󰭅		From: f32 -> Classification												
impl From<f32> for Classification {
	//		from																
	fn from(v: f32) -> Self {
		v.classify_special()
	}
}

//󰭅		From: f64 -> Classification												
impl From<f64> for Classification {
	//		from																
	fn from(v: f64) -> Self {
		v.classify_special()
	}
}



//		Traits

//		Classify																
/// Classification of a floating-point value by its bit pattern.
///
/// An IEEE-754 value is special when all of its exponent bits are set. It is
/// then infinite if the mantissa is zero, and NaN otherwise. The check is made
/// directly on those bits, rather than by comparison, as NaN compares unequal
/// to everything and so cannot be found by ruling out the infinities.
///
pub trait Classify: Copy {
	//		classify_special													
	/// Classifies the value as finite, infinite, or not a number.
	fn classify_special(self) -> Classification;
}

/// Implements [`Classify`] for a primitive float, given its bit masks.
macro_rules! impl_classify {
	($t:ty, $exponent:expr, $mantissa:expr) => {
		impl Classify for $t {
			fn classify_special(self) -> Classification {
				let bits = self.to_bits();
				if bits & $exponent != $exponent {
					Classification::Finite
				} else if bits & $mantissa == 0 {
					Classification::Infinite
				} else {
					Classification::NotANumber
				}
			}
		}
	};
}

impl_classify!(f32, F32_EXPONENT_MASK, F32_MANTISSA_MASK);
impl_classify!(f64, F64_EXPONENT_MASK, F64_MANTISSA_MASK);



//		Functions

//		classify																
/// Classifies a value as finite, infinite, or not a number.
///
/// # Parameters
///
/// * `value` - The value to classify.
///
#[must_use]
pub fn classify(value: f64) -> Classification {
	value.classify_special()
}

//		is_finite																
/// Whether the value is neither infinite nor NaN.
#[must_use]
pub fn is_finite(value: f64) -> bool {
	classify(value) == Classification::Finite
}

//		is_infinite																
/// Whether the value is positive or negative infinity.
///
/// This is `false` for all finite values, and for NaN.
///
/// # Parameters
///
/// * `value` - The value to check.
///
#[must_use]
pub fn is_infinite(value: f64) -> bool {
	classify(value) == Classification::Infinite
}

//		is_nan																	
/// Whether the value is NaN, i.e. not a number.
///
/// This is `false` for all finite values, and for both infinities.
///
/// # Parameters
///
/// * `value` - The value to check.
///
#[must_use]
pub fn is_nan(value: f64) -> bool {
	classify(value) == Classification::NotANumber
}
