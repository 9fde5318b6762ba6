use super::Type;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A single typed cell value, as bound into generated statements and as
/// returned by drivers.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// Fixed-point decimal
    Decimal(Decimal),

    /// String value
    String(String),

    /// UUID value
    Uuid(Uuid),

    /// Date and time without a zone
    DateTime(NaiveDateTime),

    /// Date and time in UTC
    DateTimeUtc(DateTime<Utc>),

    /// Calendar date
    Date(NaiveDate),

    /// Value of an enumerated type
    Enum(ValueEnum),
}

/// A value of a fieldless enumeration: its discriminant and symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueEnum {
    pub discriminant: i64,
    pub name: &'static str,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The type of this value, or `None` for null.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Null => return None,
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::Decimal(_) => Type::Decimal,
            Self::String(_) => Type::String,
            Self::Uuid(_) => Type::Uuid,
            Self::DateTime(_) => Type::DateTime,
            Self::DateTimeUtc(_) => Type::DateTimeUtc,
            Self::Date(_) => Type::Date,
            Self::Enum(_) => Type::Enum,
        })
    }

    /// Variant name, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::Decimal(_) => "Decimal",
            Self::String(_) => "String",
            Self::Uuid(_) => "Uuid",
            Self::DateTime(_) => "DateTime",
            Self::DateTimeUtc(_) => "DateTimeUtc",
            Self::Date(_) => "Date",
            Self::Enum(_) => "Enum",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// The canonical string form of the value, or `None` for null.
    ///
    /// Enumerations render as their symbolic name.
    pub fn to_text(&self) -> Option<String> {
        Some(match self {
            Self::Null => return None,
            Self::Bool(v) => v.to_string(),
            Self::I8(v) => v.to_string(),
            Self::I16(v) => v.to_string(),
            Self::I32(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::U8(v) => v.to_string(),
            Self::U16(v) => v.to_string(),
            Self::U32(v) => v.to_string(),
            Self::U64(v) => v.to_string(),
            Self::F32(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::Decimal(v) => v.to_string(),
            Self::String(v) => v.clone(),
            Self::Uuid(v) => v.to_string(),
            Self::DateTime(v) => v.to_string(),
            Self::DateTimeUtc(v) => v.to_rfc3339(),
            Self::Date(v) => v.to_string(),
            Self::Enum(v) => v.name.to_string(),
        })
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F32(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<Decimal> for Value {
    fn from(src: Decimal) -> Self {
        Self::Decimal(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<ValueEnum> for Value {
    fn from(src: ValueEnum) -> Self {
        Self::Enum(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.cast(Type::Bool)? {
            Value::Bool(v) => Ok(v),
            other => Err(crate::Error::type_conversion(other, "bool")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.cast(Type::String)? {
            Value::String(v) => Ok(v),
            other => Err(crate::Error::type_conversion(other, "String")),
        }
    }
}

impl TryFrom<Value> for Decimal {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.cast(Type::Decimal)? {
            Value::Decimal(v) => Ok(v),
            other => Err(crate::Error::type_conversion(other, "Decimal")),
        }
    }
}

impl TryFrom<Value> for Uuid {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.cast(Type::Uuid)? {
            Value::Uuid(v) => Ok(v),
            other => Err(crate::Error::type_conversion(other, "Uuid")),
        }
    }
}
