//! Bounds of the fixed-width signed integer types.



//		Modules

#[cfg(test)]
#[path = "tests/bounds.rs"]
mod tests;



//		Packages

use crate::errors::ConversionError;
use bytes::BytesMut;
use core::{
	error::Error,
	fmt::{Debug, Display, Formatter, self},
	str::FromStr,
};
use serde::{Deserialize, Serialize};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Enums

//		Width																	
/// The width of a fixed-width signed integer type.
///
/// Every width describes a two's-complement range, where for a width of `n`
/// bits the minimum is `-2^(n-1)` and the maximum is `2^(n-1) - 1`. The bounds
/// are always reported as [`i64`], which is wide enough for all of them.
///
/// # Conversion
///
/// A [`Width`] converts to and from its bit count as a [`u8`], which is also
/// how it is serialised. It displays as the name of the matching Rust type,
/// e.g. `i32`, and can be parsed from either form, i.e. `"i32"` or `"32"`.
///
/// # Databases
///
/// PostgreSQL integer columns map onto widths via
/// [`for_sql_type()`](Width::for_sql_type()), which is useful for checking a
/// value will fit before storing it. The width itself can also be stored, as
/// its bit count, in any integer column.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Width {
	/// 8 bits, as per [`i8`].
	W8,
	
	/// 16 bits, as per [`i16`].
	W16,
	
	/// 32 bits, as per [`i32`].
	W32,
	
	/// 64 bits, as per [`i64`].
	W64,
}

//󰭅		Width																	
impl Width {
	//		Public constants													
	/// All supported widths, narrowest first.
	pub const ALL: [Self; 4] = [Self::W8, Self::W16, Self::W32, Self::W64];
	
	//		Public methods														
	
	//		bits																
	/// The number of bits in the width.
	#[must_use]
	pub const fn bits(self) -> u8 {
		match self {
			Self::W8  => 8,
			Self::W16 => 16,
			Self::W32 => 32,
			Self::W64 => 64,
		}
	}
	
	//		contains															
	/// Whether the given value lies within the range of the width.
	///
	/// # Parameters
	///
	/// * `value` - The value to check. This is accepted as an [`i128`] so that
	///             results of arithmetic on any of the supported widths can be
	///             checked without themselves overflowing.
	///
	#[must_use]
	pub fn contains(self, value: i128) -> bool {
		(i128::from(self.min())..=i128::from(self.max())).contains(&value)
	}
	
	//		for_sql_type														
	/// Gets the width of a PostgreSQL integer column type.
	///
	/// Returns [`None`] if the type is not a signed integer type.
	///
	/// This describes the range of values a column can hold, which is separate
	/// from the columns a [`Width`] itself can be stored in: `"char"` maps to
	/// [`W8`](Width::W8) here, but is not accepted by [`FromSql`] or [`ToSql`].
	///
	/// # Parameters
	///
	/// * `ty` - The column type.
	///
	#[must_use]
	pub fn for_sql_type(ty: &Type) -> Option<Self> {
		match ty {
			&Type::CHAR => Some(Self::W8),
			&Type::INT2 => Some(Self::W16),
			&Type::INT4 => Some(Self::W32),
			&Type::INT8 => Some(Self::W64),
			_           => None,
		}
	}
	
	//		max																	
	/// The largest value representable in the width, i.e. `2^(n-1) - 1`.
	#[allow(clippy::cast_lossless, reason = "From is not const")]
	#[must_use]
	pub const fn max(self) -> i64 {
		match self {
			Self::W8  => i8::MAX  as i64,
			Self::W16 => i16::MAX as i64,
			Self::W32 => i32::MAX as i64,
			Self::W64 => i64::MAX,
		}
	}
	
	//		min																	
	/// The smallest value representable in the width, i.e. `-2^(n-1)`.
	#[allow(clippy::cast_lossless, reason = "From is not const")]
	#[must_use]
	pub const fn min(self) -> i64 {
		match self {
			Self::W8  => i8::MIN  as i64,
			Self::W16 => i16::MIN as i64,
			Self::W32 => i32::MIN as i64,
			Self::W64 => i64::MIN,
		}
	}
}

//󰭅		Display																	
impl Display for Width {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "i{}", self.bits())
	}
}

//󰭅		From: Width -> u8														
impl From<Width> for u8 {
	//		from																
	fn from(v: Width) -> Self {
		v.bits()
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for Width {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		let bits = match ty {
			&Type::INT2 => i64::from(i16::from_sql(ty, raw)?),
			&Type::INT4 => i64::from(i32::from_sql(ty, raw)?),
			&Type::INT8 => i64::from_sql(ty, raw)?,
			unknown     => return Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Width: {unknown}"),
			))),
		};
		let bits = u8::try_from(bits).map_err(|_| {
			if bits < 0 { ConversionError::ValueTooSmall } else { ConversionError::ValueTooLarge }
		})?;
		Ok(Self::try_from(bits)?)
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8)
	}
}

//󰭅		FromStr																	
impl FromStr for Width {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		let digits  = trimmed.strip_prefix('i').unwrap_or(trimmed);
		Self::try_from(digits.parse::<u8>()?)
	}
}

//󰭅		ToSql																	
impl ToSql for Width {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::from(self.bits()).to_sql(ty, out),
			&Type::INT4 => i32::from(self.bits()).to_sql(ty, out),
			&Type::INT8 => i64::from(self.bits()).to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Width: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8)
	}
	
	to_sql_checked!();
}

//󰭅		TryFrom: u8 -> Width													
impl TryFrom<u8> for Width {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: u8) -> Result<Self, Self::Error> {
		match v {
			8     => Ok(Self::W8),
			16    => Ok(Self::W16),
			32    => Ok(Self::W32),
			64    => Ok(Self::W64),
			other => Err(ConversionError::InvalidWidth(other)),
		}
	}
}



//		Traits

//		Bounded																	
/// A fixed-width signed integer type with known bounds.
///
/// This is implemented for [`i8`], [`i16`], [`i32`], and [`i64`], and is the
/// basis of the checked arithmetic and conversions in this crate. All of those
/// work by moving the values into an [`i128`], which cannot overflow for any
/// single addition or subtraction of the supported widths, and then narrowing
/// back with an explicit range check.
///
pub trait Bounded: Copy + Debug + Display + Ord {
	/// The smallest representable value.
	const MIN:   Self;
	
	/// The largest representable value.
	const MAX:   Self;
	
	/// The width of the type.
	const WIDTH: Width;
	
	//		narrow_from_i128													
	/// Converts from an [`i128`], returning [`None`] if the value is outside
	/// the range of the type.
	///
	/// # Parameters
	///
	/// * `value` - The value to convert.
	///
	#[must_use]
	fn narrow_from_i128(value: i128) -> Option<Self> {
		Self::WIDTH.contains(value).then(|| Self::wrap_from_i128(value))
	}
	
	//		to_i64																
	/// Widens the value to an [`i64`].
	fn to_i64(self) -> i64;
	
	//		to_i128																
	/// Widens the value to an [`i128`].
	fn to_i128(self) -> i128;
	
	//		wrap_from_i128														
	/// Converts from an [`i128`] by keeping only the low bits, i.e. the
	/// two's-complement wraparound that plain `as` casts perform.
	///
	/// # Parameters
	///
	/// * `value` - The value to convert.
	///
	fn wrap_from_i128(value: i128) -> Self;
}

/// Implements [`Bounded`] for a primitive signed integer.
macro_rules! impl_bounded {
	($t:ty, $width:expr) => {
		impl Bounded for $t {
			const MIN:   Self  = <$t>::MIN;
			const MAX:   Self  = <$t>::MAX;
			const WIDTH: Width = $width;
			
			fn to_i64(self) -> i64 {
				i64::from(self)
			}
			
			fn to_i128(self) -> i128 {
				i128::from(self)
			}
			
			#[expect(clippy::cast_possible_truncation, reason = "Intentional wraparound")]
			fn wrap_from_i128(value: i128) -> Self {
				value as Self
			}
		}
	};
}

impl_bounded!(i8,  Width::W8);
impl_bounded!(i16, Width::W16);
impl_bounded!(i32, Width::W32);
impl_bounded!(i64, Width::W64);



//		Functions

//		max																		
/// The largest value representable in the given width, i.e. `2^(n-1) - 1`.
///
/// # Parameters
///
/// * `width` - The width to get the maximum of.
///
#[must_use]
pub const fn max(width: Width) -> i64 {
	width.max()
}

//		min																		
/// The smallest value representable in the given width, i.e. `-2^(n-1)`.
///
/// # Parameters
///
/// * `width` - The width to get the minimum of.
///
#[must_use]
pub const fn min(width: Width) -> i64 {
	width.min()
}
