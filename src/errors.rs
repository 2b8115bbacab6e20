//! Contains error types used throughout the library.



//		Packages

use crate::bounds::Width;
use core::{
	fmt::{Display, Formatter, self},
	num::ParseIntError,
};
use thiserror::Error as ThisError;



//		Enums

//		Operation																
/// The arithmetic operation that produced an [`ArithmeticError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Operation {
	/// Addition.
	Add,
	
	/// Subtraction.
	Sub,
	
	/// Multiplication.
	Mul,
	
	/// Division, truncating toward zero.
	Div,
}

//󰭅		Display																	
impl Display for Operation {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match *self {
			Self::Add => "+",
			Self::Sub => "-",
			Self::Mul => "*",
			Self::Div => "/",
		})
	}
}

//		ArithmeticError															
/// Represents all possible errors raised by checked arithmetic.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor of a division is zero, so there is no result at all.
	#[error("Division by zero: {lhs} / 0 in {width}")]
	DivisionByZero {
		/// The dividend.
		lhs:   i64,
		
		/// The width of the operand type.
		width: Width,
	},
	
	/// The exact result lies outside the range of the operand type. This
	/// covers both directions, i.e. results above the maximum and below the
	/// minimum.
	#[error("Overflow: {lhs} {operation} {rhs} is outside the range of {width}")]
	Overflow {
		/// The operation that was attempted.
		operation: Operation,
		
		/// The left-hand operand.
		lhs:       i64,
		
		/// The right-hand operand.
		rhs:       i64,
		
		/// The width of the operand type.
		width:     Width,
	},
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value is infinite, and has no integer equivalent.
	#[error("Value is infinite")]
	Infinite,
	
	/// The incoming bit count does not name a supported width.
	#[error("Invalid width: {0}")]
	InvalidWidth(u8),
	
	/// The incoming value is not a number.
	#[error("Value is not a number")]
	NotANumber,
	
	/// The incoming value is not a valid integer.
	#[error("Invalid integer: {0}")]
	ParseIntError(#[from] ParseIntError),
	
	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
	
	/// The incoming value is too small (i.e. too far below zero) to be
	/// converted to the destination type.
	#[error("Value too small")]
	ValueTooSmall,
}
