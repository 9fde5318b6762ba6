use super::{Type, Value};
use crate::{Error, Result};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use uuid::Uuid;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl Value {
    /// Converts the value to `ty`.
    ///
    /// Null casts to null. Integers convert across widths when in range,
    /// decimals and floats convert to integers only when integral, and text
    /// is parsed. Conversions to floating point round to the nearest
    /// representable value; a finite value outside the `f32` range fails
    /// rather than becoming infinite. Anything else fails with a type
    /// conversion error.
    pub fn cast(self, ty: Type) -> Result<Value> {
        if self.is_null() || self.ty() == Some(ty) {
            return Ok(self);
        }

        let ret = match ty {
            Type::Bool => self.to_bool().map(Value::Bool),
            Type::I8 => self.to_int().map(Value::I8),
            Type::I16 => self.to_int().map(Value::I16),
            Type::I32 => self.to_int().map(Value::I32),
            Type::I64 => self.to_int().map(Value::I64),
            Type::U8 => self.to_int().map(Value::U8),
            Type::U16 => self.to_int().map(Value::U16),
            Type::U32 => self.to_int().map(Value::U32),
            Type::U64 => self.to_int().map(Value::U64),
            Type::F32 => self.to_f32().map(Value::F32),
            Type::F64 => self.to_f64().map(Value::F64),
            Type::Decimal => self.to_decimal().map(Value::Decimal),
            Type::String => self.to_text().map(Value::String),
            Type::Uuid => self.to_uuid().map(Value::Uuid),
            Type::DateTime => self.to_date_time().map(Value::DateTime),
            Type::DateTimeUtc => self.to_date_time_utc().map(Value::DateTimeUtc),
            Type::Date => self.to_date().map(Value::Date),
            // Enumerations are resolved by the enum's own loader, which
            // accepts its symbolic name or its discriminant.
            Type::Enum => match &self {
                Value::String(_) => Some(self.clone()),
                _ => self.to_int().map(Value::I64),
            },
        };

        ret.ok_or_else(|| Error::type_conversion(self, ty.name()))
    }

    fn to_wide(&self) -> Option<i128> {
        match self {
            Value::Bool(v) => Some(i128::from(*v)),
            Value::I8(v) => Some(i128::from(*v)),
            Value::I16(v) => Some(i128::from(*v)),
            Value::I32(v) => Some(i128::from(*v)),
            Value::I64(v) => Some(i128::from(*v)),
            Value::U8(v) => Some(i128::from(*v)),
            Value::U16(v) => Some(i128::from(*v)),
            Value::U32(v) => Some(i128::from(*v)),
            Value::U64(v) => Some(i128::from(*v)),
            Value::F32(v) => integral_float(f64::from(*v)),
            Value::F64(v) => integral_float(*v),
            Value::Decimal(v) => integral_decimal(v),
            Value::Enum(v) => Some(i128::from(v.discriminant)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i128>()
                    .ok()
                    .or_else(|| s.parse::<Decimal>().ok().and_then(|d| integral_decimal(&d)))
            }
            _ => None,
        }
    }

    fn to_int<T: TryFrom<i128>>(&self) -> Option<T> {
        self.to_wide().and_then(|wide| T::try_from(wide).ok())
    }

    fn to_bool(&self) -> Option<bool> {
        match self {
            Value::String(s) => match s.trim() {
                s if s.eq_ignore_ascii_case("true") => Some(true),
                s if s.eq_ignore_ascii_case("false") => Some(false),
                "1" => Some(true),
                "0" => Some(false),
                _ => None,
            },
            _ => match self.to_wide()? {
                0 => Some(false),
                1 => Some(true),
                _ => None,
            },
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            Value::Decimal(v) => v.to_f64(),
            Value::String(s) => s.trim().parse().ok(),
            Value::Bool(_) | Value::Enum(_) => None,
            _ => self.to_wide().map(|v| v as f64),
        }
    }

    fn to_f32(&self) -> Option<f32> {
        let wide = self.to_f64()?;
        let narrow = wide as f32;
        (narrow.is_finite() || !wide.is_finite()).then_some(narrow)
    }

    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Value::F32(v) => Decimal::try_from(*v).ok(),
            Value::F64(v) => Decimal::try_from(*v).ok(),
            Value::String(s) => s.trim().parse().ok(),
            Value::Bool(_) | Value::Enum(_) => None,
            _ => Decimal::try_from_i128_with_scale(self.to_wide()?, 0).ok(),
        }
    }

    fn to_uuid(&self) -> Option<Uuid> {
        match self {
            Value::String(s) => Uuid::parse_str(s.trim()).ok(),
            _ => None,
        }
    }

    fn to_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTimeUtc(v) => Some(v.naive_utc()),
            Value::Date(v) => Some(v.and_time(NaiveTime::MIN)),
            Value::String(s) => parse_date_time(s.trim()),
            _ => None,
        }
    }

    fn to_date_time_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::String(s) => {
                let s = s.trim();
                DateTime::parse_from_rfc3339(s)
                    .map(|v| v.with_timezone(&Utc))
                    .ok()
                    .or_else(|| parse_date_time(s).map(|v| v.and_utc()))
            }
            _ => self.to_date_time().map(|v| v.and_utc()),
        }
    }

    fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Value::DateTime(v) => Some(v.date()),
            Value::DateTimeUtc(v) => Some(v.date_naive()),
            Value::String(s) => {
                let s = s.trim();
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .or_else(|| parse_date_time(s).map(|v| v.date()))
            }
            _ => None,
        }
    }
}

fn integral_float(v: f64) -> Option<i128> {
    (v.is_finite() && v.fract() == 0.0 && v.abs() < 1e38).then_some(v as i128)
}

fn integral_decimal(v: &Decimal) -> Option<i128> {
    if v.fract().is_zero() {
        v.trunc().to_i128()
    } else {
        None
    }
}

fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}
