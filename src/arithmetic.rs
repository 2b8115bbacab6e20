//! Checked and explicitly-wrapping arithmetic.
//!
//! Plain arithmetic on the primitive integers panics on overflow in debug
//! builds and silently wraps in release builds. The functions here make the
//! choice explicit: either the caller gets an error describing the overflow, or
//! they ask for the wraparound by name.



//		Modules

#[cfg(test)]
#[path = "tests/arithmetic.rs"]
mod tests;



//		Packages

use crate::{
	bounds::Bounded,
	errors::{ArithmeticError, Operation},
};



//		Traits

//		CheckedOps																
/// Arithmetic that reports overflow as an error.
///
/// The exact result is computed in an [`i128`], which is wide enough that no
/// single operation on the supported widths can overflow it, and is then
/// narrowed back with a range check against the bounds of the operand type.
/// This detects results that are too large as well as results that are too
/// small, without ever looking at a wrapped value.
///
/// This is implemented for every [`Bounded`] type.
///
pub trait CheckedOps: Bounded {
	//		try_add																
	/// Checked addition.
	///
	/// Computes `self + rhs`, returning an error if the exact sum lies outside
	/// the range of the type.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the sum is above [`Bounded::MAX`]
	/// or below [`Bounded::MIN`].
	///
	#[expect(clippy::arithmetic_side_effects, reason = "Operands are at most 64 bits")]
	fn try_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
		narrow(Operation::Add, self, rhs, self.to_i128() + rhs.to_i128())
	}
	
	//		try_sub																
	/// Checked subtraction.
	///
	/// Computes `self - rhs`, returning an error if the exact difference lies
	/// outside the range of the type.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the difference is above
	/// [`Bounded::MAX`] or below [`Bounded::MIN`].
	///
	#[expect(clippy::arithmetic_side_effects, reason = "Operands are at most 64 bits")]
	fn try_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
		narrow(Operation::Sub, self, rhs, self.to_i128() - rhs.to_i128())
	}
	
	//		try_mul																
	/// Checked multiplication.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the product is above
	/// [`Bounded::MAX`] or below [`Bounded::MIN`].
	///
	#[expect(clippy::arithmetic_side_effects, reason = "Operands are at most 64 bits")]
	fn try_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
		narrow(Operation::Mul, self, rhs, self.to_i128() * rhs.to_i128())
	}
	
	//		try_div																
	/// Checked integer division.
	///
	/// The quotient is truncated toward zero, discarding any remainder, so
	/// `2 / 3` is `0` and `-7 / 2` is `-3`. The only quotient that can fall
	/// outside the range of the type is `MIN / -1`.
	///
	/// # Parameters
	///
	/// * `rhs` - The divisor.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero, and
	/// [`ArithmeticError::Overflow`] for [`Bounded::MIN`] divided by `-1`.
	///
	fn try_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
		narrow(Operation::Div, self, rhs, divide(self, rhs)?)
	}
}

//󰭅		CheckedOps																
impl<T: Bounded> CheckedOps for T {}



//		Functions

//		checked_add																
/// Adds two 32-bit integers, returning an error instead of wrapping.
///
/// For all inputs whose exact sum lies within [`i32::MIN`]..=[`i32::MAX`] the
/// result is that sum.
///
/// # Parameters
///
/// * `a` - The left-hand operand.
/// * `b` - The right-hand operand.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`], carrying both operands, if the sum is
/// above [`i32::MAX`] or below [`i32::MIN`].
///
pub fn checked_add(a: i32, b: i32) -> Result<i32, ArithmeticError> {
	a.try_add(b)
}

//		divide																	
/// Divides exactly, truncating toward zero, or reports a zero divisor.
fn divide<T: Bounded>(lhs: T, rhs: T) -> Result<i128, ArithmeticError> {
	//	Cannot overflow, as both operands are at most 64 bits
	lhs.to_i128().checked_div(rhs.to_i128()).ok_or_else(|| ArithmeticError::DivisionByZero {
		lhs:   lhs.to_i64(),
		width: T::WIDTH,
	})
}

//		narrow																	
/// Narrows an exact result back to the operand type, or describes the overflow.
fn narrow<T: Bounded>(operation: Operation, lhs: T, rhs: T, exact: i128) -> Result<T, ArithmeticError> {
	T::narrow_from_i128(exact).ok_or_else(|| ArithmeticError::Overflow {
		operation,
		lhs:   lhs.to_i64(),
		rhs:   rhs.to_i64(),
		width: T::WIDTH,
	})
}

//		wrapping_add															
/// Adds two integers with two's-complement wraparound.
///
/// This is the silent behaviour of unchecked integer addition, made explicit:
/// e.g. `wrapping_add(i32::MAX, 1)` is [`i32::MIN`].
///
/// # Parameters
///
/// * `a` - The left-hand operand.
/// * `b` - The right-hand operand.
///
#[expect(clippy::arithmetic_side_effects, reason = "Operands are at most 64 bits")]
#[must_use]
pub fn wrapping_add<T: Bounded>(a: T, b: T) -> T {
	T::wrap_from_i128(a.to_i128() + b.to_i128())
}

//		wrapping_div															
/// Divides two integers, truncating toward zero, with two's-complement
/// wraparound.
///
/// The only quotient that wraps is `MIN / -1`, which gives `MIN`. A zero
/// divisor has no result to wrap, and is still reported as an error.
///
/// # Parameters
///
/// * `a` - The dividend.
/// * `b` - The divisor.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] if `b` is zero.
///
pub fn wrapping_div<T: Bounded>(a: T, b: T) -> Result<T, ArithmeticError> {
	Ok(T::wrap_from_i128(divide(a, b)?))
}

//		wrapping_mul															
/// Multiplies two integers with two's-complement wraparound, keeping the low
/// bits of the exact product.
///
/// # Parameters
///
/// * `a` - The left-hand operand.
/// * `b` - The right-hand operand.
///
#[expect(clippy::arithmetic_side_effects, reason = "Operands are at most 64 bits")]
#[must_use]
pub fn wrapping_mul<T: Bounded>(a: T, b: T) -> T {
	T::wrap_from_i128(a.to_i128() * b.to_i128())
}

//		wrapping_sub															
/// Subtracts two integers with two's-complement wraparound.
///
/// This is the silent behaviour of unchecked integer subtraction, made
/// explicit: e.g. `wrapping_sub(i32::MIN, 1)` is [`i32::MAX`].
///
/// # Parameters
///
/// * `a` - The left-hand operand.
/// * `b` - The right-hand operand.
///
#[expect(clippy::arithmetic_side_effects, reason = "Operands are at most 64 bits")]
#[must_use]
pub fn wrapping_sub<T: Bounded>(a: T, b: T) -> T {
	T::wrap_from_i128(a.to_i128() - b.to_i128())
}
