use super::{Formatter, ToSql};

use rowmap_core::stmt::Value;

use chrono::NaiveTime;
use std::fmt;

const TEMPORAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders a [`Value`] as inline SQL literal text.
///
/// * null is `NULL`
/// * temporal values are quoted as `yyyy-MM-dd HH:mm:ss.fff`
/// * numbers are unquoted
/// * enumerations render their discriminant, unquoted
/// * everything else is quoted with every `'` doubled
///
/// NaN and infinite floats have no SQL literal. The [`Generator`] rejects
/// them with a type conversion error before rendering; callers rendering
/// literals directly must check [`Literal::is_representable`].
///
/// [`Generator`]: crate::Generator
#[derive(Debug, Clone, Copy)]
pub struct Literal<'a>(pub &'a Value);

/// Returns the literal text for `value`.
pub fn literal(value: &Value) -> String {
    Literal(value).to_string()
}

impl Literal<'_> {
    /// Whether the value has a valid SQL literal form.
    pub fn is_representable(&self) -> bool {
        match self.0 {
            Value::F32(v) => v.is_finite(),
            Value::F64(v) => v.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("NULL"),
            Value::DateTime(v) => write!(f, "'{}'", v.format(TEMPORAL_FORMAT)),
            Value::DateTimeUtc(v) => write!(f, "'{}'", v.naive_utc().format(TEMPORAL_FORMAT)),
            Value::Date(v) => write!(f, "'{}'", v.and_time(NaiveTime::MIN).format(TEMPORAL_FORMAT)),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Enum(v) => write!(f, "{}", v.discriminant),
            other => {
                let text = other.to_text().unwrap_or_default();
                write!(f, "'{}'", text.replace('\'', "''"))
            }
        }
    }
}

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}
