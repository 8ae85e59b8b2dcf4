//! Typed extraction from [`Value`].

use crate::{ConversionError, Value, ValueType};

/// Trait for types that can be read out of a [`Value`].
///
/// Conversions go through the matching [`ValueType`] so entity getters accept
/// the same storage classes the mapping layer does. `Option<T>` maps NULL to
/// `None`; every other impl rejects NULL.
pub trait FromValue: Sized {
    /// Convert a borrowed value.
    fn from_value(value: &Value) -> Result<Self, ConversionError>;
}

macro_rules! impl_from_value_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self, ConversionError> {
                    match ValueType::Integer.convert(value.clone())? {
                        Value::Integer(i) => i.try_into().map_err(|_| ConversionError::OutOfRange {
                            value: i.to_string(),
                            to: stringify!($ty),
                        }),
                        _ => Err(ConversionError::UnexpectedNull { to: stringify!($ty) }),
                    }
                }
            }
        )+
    };
}

impl_from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match ValueType::Real.convert(value.clone())? {
            Value::Real(r) => Ok(r),
            _ => Err(ConversionError::UnexpectedNull { to: "f64" }),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        f64::from_value(value).map(|r| r as f32)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match ValueType::Boolean.convert(value.clone())? {
            Value::Boolean(b) => Ok(b),
            _ => Err(ConversionError::UnexpectedNull { to: "bool" }),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match ValueType::Text.convert(value.clone())? {
            Value::Text(s) => Ok(s),
            _ => Err(ConversionError::UnexpectedNull { to: "String" }),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match ValueType::Bytes.convert(value.clone())? {
            Value::Bytes(b) => Ok(b),
            _ => Err(ConversionError::UnexpectedNull { to: "Vec<u8>" }),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}
