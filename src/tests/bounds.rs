//		Packages

use super::*;
use claims::{assert_err, assert_err_eq, assert_none, assert_ok_eq, assert_some_eq};
use core::cmp::Ordering;
use rubedo::sugar::s;
use std::collections::HashSet;



//		Tests

mod constants {
	use super::*;
	
	//		ALL																	
	#[test]
	fn all__ordered() {
		assert_eq!(Width::ALL, [Width::W8, Width::W16, Width::W32, Width::W64]);
		assert!(Width::ALL.windows(2).all(|pair| pair[0] < pair[1]));
	}
}

mod public_methods {
	use super::*;
	
	//		bits																
	#[test]
	fn bits() {
		assert_eq!(Width::W8.bits(),  8);
		assert_eq!(Width::W16.bits(), 16);
		assert_eq!(Width::W32.bits(), 32);
		assert_eq!(Width::W64.bits(), 64);
	}
	
	//		contains															
	#[test]
	fn contains__in_range() {
		assert!(Width::W8.contains(0));
		assert!(Width::W8.contains(127));
		assert!(Width::W8.contains(-128));
		assert!(Width::W64.contains(i128::from(i64::MAX)));
		assert!(Width::W64.contains(i128::from(i64::MIN)));
	}
	#[test]
	fn contains__out_of_range() {
		assert!(!Width::W8.contains(128));
		assert!(!Width::W8.contains(-129));
		assert!(!Width::W32.contains(i128::from(i32::MAX) + 1));
		assert!(!Width::W64.contains(i128::from(i64::MIN) - 1));
	}
	
	//		for_sql_type														
	#[test]
	fn for_sql_type__integers() {
		assert_some_eq!(Width::for_sql_type(&Type::CHAR), Width::W8);
		assert_some_eq!(Width::for_sql_type(&Type::INT2), Width::W16);
		assert_some_eq!(Width::for_sql_type(&Type::INT4), Width::W32);
		assert_some_eq!(Width::for_sql_type(&Type::INT8), Width::W64);
	}
	#[test]
	fn for_sql_type__other() {
		assert_none!(Width::for_sql_type(&Type::TEXT));
		assert_none!(Width::for_sql_type(&Type::FLOAT8));
		assert_none!(Width::for_sql_type(&Type::NUMERIC));
	}
	#[test]
	fn for_sql_type__char_is_range_only() {
		assert_some_eq!(Width::for_sql_type(&Type::CHAR), Width::W8);
		assert!(!<Width as FromSql<'_>>::accepts(&Type::CHAR));
		assert!(!<Width as ToSql>::accepts(&Type::CHAR));
	}
	
	//		max																	
	#[test]
	fn max__literals() {
		assert_eq!(Width::W8.max(),  127);
		assert_eq!(Width::W16.max(), 32_767);
		assert_eq!(Width::W32.max(), 0x7FFF_FFFF);
		assert_eq!(Width::W64.max(), 0x7FFF_FFFF_FFFF_FFFF);
	}
	
	//		min																	
	#[test]
	fn min__literals() {
		assert_eq!(Width::W8.min(),  -128);
		assert_eq!(Width::W16.min(), -32_768);
		assert_eq!(Width::W32.min(), -0x8000_0000);
		assert_eq!(Width::W64.min(), -0x7FFF_FFFF_FFFF_FFFF - 1);
	}
	
	//		min and max															
	#[test]
	fn range__covers_two_to_the_n() {
		for width in Width::ALL {
			let span = i128::from(width.max()) - i128::from(width.min()) + 1;
			assert_eq!(span, 1_i128 << width.bits());
		}
	}
	#[test]
	fn range__min_is_negated_max_minus_one() {
		for width in Width::ALL {
			assert_eq!(width.min(), -width.max() - 1);
		}
	}
}

mod functions {
	use super::*;
	
	//		max																	
	#[test]
	fn max__matches_primitives() {
		assert_eq!(max(Width::W8),  i64::from(i8::MAX));
		assert_eq!(max(Width::W16), i64::from(i16::MAX));
		assert_eq!(max(Width::W32), i64::from(i32::MAX));
		assert_eq!(max(Width::W64), i64::MAX);
	}
	#[test]
	fn max__const() {
		const MAX_32: i64 = max(Width::W32);
		assert_eq!(MAX_32, 2_147_483_647);
	}
	
	//		min																	
	#[test]
	fn min__matches_primitives() {
		assert_eq!(min(Width::W8),  i64::from(i8::MIN));
		assert_eq!(min(Width::W16), i64::from(i16::MIN));
		assert_eq!(min(Width::W32), i64::from(i32::MIN));
		assert_eq!(min(Width::W64), i64::MIN);
	}
	#[test]
	fn min__const() {
		const MIN_32: i64 = min(Width::W32);
		assert_eq!(MIN_32, -2_147_483_648);
	}
}

mod bounded {
	use super::*;
	
	//		Constants															
	#[test]
	fn constants() {
		assert_eq!(<i8  as Bounded>::MIN,   i8::MIN);
		assert_eq!(<i8  as Bounded>::MAX,   i8::MAX);
		assert_eq!(<i8  as Bounded>::WIDTH, Width::W8);
		assert_eq!(<i16 as Bounded>::WIDTH, Width::W16);
		assert_eq!(<i32 as Bounded>::MIN,   i32::MIN);
		assert_eq!(<i32 as Bounded>::MAX,   i32::MAX);
		assert_eq!(<i32 as Bounded>::WIDTH, Width::W32);
		assert_eq!(<i64 as Bounded>::WIDTH, Width::W64);
	}
	#[test]
	fn constants__agree_with_width() {
		assert_eq!(<i8  as Bounded>::MIN.to_i64(), Width::W8.min());
		assert_eq!(<i16 as Bounded>::MAX.to_i64(), Width::W16.max());
		assert_eq!(<i32 as Bounded>::MIN.to_i64(), Width::W32.min());
		assert_eq!(<i64 as Bounded>::MAX.to_i64(), Width::W64.max());
	}
	
	//		narrow_from_i128													
	#[test]
	fn narrow_from_i128__in_range() {
		assert_some_eq!(i8::narrow_from_i128(-128),                  i8::MIN);
		assert_some_eq!(i16::narrow_from_i128(42),                   42_i16);
		assert_some_eq!(i64::narrow_from_i128(i128::from(i64::MAX)), i64::MAX);
	}
	#[test]
	fn narrow_from_i128__out_of_range() {
		assert_none!(i8::narrow_from_i128(128));
		assert_none!(i32::narrow_from_i128(i128::from(i32::MIN) - 1));
		assert_none!(i64::narrow_from_i128(i128::MAX));
	}
	
	//		to_i64																
	#[test]
	fn to_i64() {
		assert_eq!((-5_i8).to_i64(),   -5);
		assert_eq!(i32::MAX.to_i64(),  2_147_483_647);
		assert_eq!(i64::MIN.to_i64(),  i64::MIN);
	}
	
	//		to_i128																
	#[test]
	fn to_i128() {
		assert_eq!(i16::MIN.to_i128(), -32_768);
		assert_eq!(i64::MAX.to_i128(), i128::from(i64::MAX));
	}
	
	//		wrap_from_i128														
	#[test]
	fn wrap_from_i128() {
		assert_eq!(i8::wrap_from_i128(128),                        i8::MIN);
		assert_eq!(i8::wrap_from_i128(-129),                       i8::MAX);
		assert_eq!(i16::wrap_from_i128(0x0123_4567),               0x4567);
		assert_eq!(i32::wrap_from_i128(i128::from(i32::MAX) + 1),  i32::MIN);
	}
}

mod derived_traits {
	use super::*;
	
	//		Debug																
	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", Width::W32), "W32");
	}
	
	//		Deserialize															
	#[test]
	fn deserialize__valid() {
		assert_ok_eq!(serde_json::from_str::<Width>("8"),  Width::W8);
		assert_ok_eq!(serde_json::from_str::<Width>("64"), Width::W64);
	}
	#[test]
	fn deserialize__invalid() {
		let err = serde_json::from_str::<Width>("12");
		assert_err!(&err);
		assert!(err.unwrap_err().to_string().starts_with("Invalid width: 12"));
	}
	
	//		Hash																
	#[test]
	fn hash() {
		let mut set = HashSet::new();
		_ = set.insert(Width::W16);
		assert!( set.contains(&Width::W16));
		assert!(!set.contains(&Width::W32));
	}
	
	//		Ord																	
	#[test]
	fn ord() {
		assert!(Width::W8  < Width::W16);
		assert!(Width::W64 > Width::W32);
		assert_eq!(Width::W32.cmp(&Width::W32), Ordering::Equal);
	}
	
	//		Serialize															
	#[test]
	fn serialize() {
		assert_ok_eq!(serde_json::to_string(&Width::W16), s!("16"));
		assert_ok_eq!(serde_json::to_string(&Width::ALL), s!("[8,16,32,64]"));
	}
}

mod traits {
	use super::*;
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(Width::W8.to_string(),  s!("i8"));
		assert_eq!(Width::W64.to_string(), s!("i64"));
	}
}

mod conversions {
	use super::*;
	use bytes::BytesMut;
	use tokio_postgres::types::IsNull;
	
	//		From: Width -> u8													
	#[test]
	fn from__to_u8() {
		assert_eq!(u8::from(Width::W8),  8);
		assert_eq!(u8::from(Width::W32), 32);
	}
	
	//		FromSql																
	#[test]
	fn from_sql__int2() {
		assert_ok_eq!(Width::from_sql(&Type::INT2, &16_i16.to_be_bytes()), Width::W16);
	}
	#[test]
	fn from_sql__int4() {
		assert_ok_eq!(Width::from_sql(&Type::INT4, &32_i32.to_be_bytes()), Width::W32);
	}
	#[test]
	fn from_sql__int8() {
		assert_ok_eq!(Width::from_sql(&Type::INT8, &64_i64.to_be_bytes()), Width::W64);
	}
	#[test]
	fn from_sql__invalid_type() {
		let err = Width::from_sql(&Type::TEXT, b"32");
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), s!("Invalid type for Width: text"));
	}
	#[test]
	fn from_sql__invalid_width() {
		let err = Width::from_sql(&Type::INT4, &7_i32.to_be_bytes());
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), s!("Invalid width: 7"));
	}
	#[test]
	fn from_sql__negative() {
		let err = Width::from_sql(&Type::INT8, &(-8_i64).to_be_bytes());
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), s!("Value too small"));
	}
	#[test]
	fn from_sql__too_large() {
		let err = Width::from_sql(&Type::INT4, &256_i32.to_be_bytes());
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), s!("Value too large"));
	}
	#[test]
	fn from_sql__accepts() {
		assert!( <Width as FromSql>::accepts(&Type::INT2));
		assert!( <Width as FromSql>::accepts(&Type::INT4));
		assert!( <Width as FromSql>::accepts(&Type::INT8));
		assert!(!<Width as FromSql>::accepts(&Type::TEXT));
	}
	
	//		FromStr																
	#[test]
	fn from_str__valid() {
		assert_ok_eq!("i8".parse::<Width>(),    Width::W8);
		assert_ok_eq!("16".parse::<Width>(),    Width::W16);
		assert_ok_eq!(" i32 ".parse::<Width>(), Width::W32);
		assert_ok_eq!("64".parse::<Width>(),    Width::W64);
	}
	#[test]
	fn from_str__empty() {
		assert_err_eq!("".parse::<Width>(),    ConversionError::EmptyValue);
		assert_err_eq!("   ".parse::<Width>(), ConversionError::EmptyValue);
	}
	#[test]
	fn from_str__invalid_format() {
		assert_err_eq!("abc".parse::<Width>(), ConversionError::ParseIntError("abc".parse::<u8>().unwrap_err()));
		assert_err_eq!("u32".parse::<Width>(), ConversionError::ParseIntError("u32".parse::<u8>().unwrap_err()));
	}
	#[test]
	fn from_str__invalid_width() {
		assert_err_eq!("i128".parse::<Width>(), ConversionError::InvalidWidth(128));
		assert_eq!("24".parse::<Width>().unwrap_err().to_string(), s!("Invalid width: 24"));
	}
	
	//		ToSql																
	#[test]
	fn to_sql__valid() {
		let mut bytes = BytesMut::new();
		
		//	Match on IsNull variant
		match Width::W32.to_sql(&Type::INT2, &mut bytes).unwrap() {
			IsNull::No  => (),  //  Expected case
			IsNull::Yes => panic!("Unexpected NULL value"),
		}
		
		assert_eq!(i16::from_be_bytes(bytes.as_ref().try_into().unwrap()), 32_i16);
	}
	#[test]
	fn to_sql__int8() {
		let mut bytes = BytesMut::new();
		_ = Width::W64.to_sql(&Type::INT8, &mut bytes).unwrap();
		assert_eq!(i64::from_be_bytes(bytes.as_ref().try_into().unwrap()), 64_i64);
	}
	#[test]
	fn to_sql__invalid_type() {
		let mut bytes = BytesMut::new();
		let err       = Width::W8.to_sql_checked(&Type::TEXT, &mut bytes);
		assert!(err.is_err());
	}
	#[test]
	fn to_sql__accepts() {
		assert!( <Width as ToSql>::accepts(&Type::INT2));
		assert!( <Width as ToSql>::accepts(&Type::INT8));
		assert!(!<Width as ToSql>::accepts(&Type::CHAR));
		assert!(!<Width as ToSql>::accepts(&Type::FLOAT4));
	}
	
	//		TryFrom: u8 -> Width												
	#[test]
	fn try_from__u8__valid() {
		assert_ok_eq!(Width::try_from(8_u8),  Width::W8);
		assert_ok_eq!(Width::try_from(16_u8), Width::W16);
		assert_ok_eq!(Width::try_from(32_u8), Width::W32);
		assert_ok_eq!(Width::try_from(64_u8), Width::W64);
	}
	#[test]
	fn try_from__u8__invalid() {
		assert_err_eq!(Width::try_from(0_u8),   ConversionError::InvalidWidth(0));
		assert_err_eq!(Width::try_from(63_u8),  ConversionError::InvalidWidth(63));
		assert_err_eq!(Width::try_from(128_u8), ConversionError::InvalidWidth(128));
	}
}
