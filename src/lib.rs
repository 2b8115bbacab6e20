//! The Numguard crate is a library of small, explicit operations on fixed-width
//! numbers: integer bounds, checked arithmetic, truncating and rounding
//! conversions, and classification of floating-point special values.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod arithmetic;
mod bounds;
mod convert;
mod errors;
mod float;



//		Packages

pub use arithmetic::{CheckedOps, checked_add, wrapping_add, wrapping_div, wrapping_mul, wrapping_sub};
pub use bounds::{Bounded, Width, max, min};
pub use convert::{
	Truncate,
	round_float_to,
	round_to_nearest_integer,
	saturating_truncate_float,
	truncate,
	truncate_float,
	truncate_float_to,
	truncate_to,
};
pub use errors::{ArithmeticError, ConversionError, Operation};
pub use float::{Classification, Classify, classify, is_finite, is_infinite, is_nan};
