use crate::stmt::Primitive;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rowmap_core::{
    stmt::{Type, Value},
    Result,
};

macro_rules! impl_chrono_primitive {
    ($ty:ty, $name:ident) => {
        impl Primitive for $ty {
            const TYPE: Type = Type::$name;

            fn load(value: Value) -> Result<Self> {
                value.try_into()
            }

            fn to_value(&self) -> Value {
                Value::$name(*self)
            }
        }
    };
}

impl_chrono_primitive!(DateTime<Utc>, DateTimeUtc);
impl_chrono_primitive!(NaiveDateTime, DateTime);
impl_chrono_primitive!(NaiveDate, Date);
