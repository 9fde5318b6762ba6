use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::stmt::{Type, Value};

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident, $lit:literal) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $chrono {
            type Error = crate::Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value.cast(Type::$name)? {
                    Value::$name(value) => Ok(value),
                    other => Err(crate::Error::type_conversion(other, $lit)),
                }
            }
        }
    };
}

impl_chrono_conversions!(DateTime<Utc>, DateTimeUtc, "DateTime<Utc>");
impl_chrono_conversions!(NaiveDateTime, DateTime, "NaiveDateTime");
impl_chrono_conversions!(NaiveDate, Date, "NaiveDate");
