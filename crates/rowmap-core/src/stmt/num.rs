use super::{Type, Value};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) $lit:literal
        )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Conversions go through `Value::cast`, so any numeric variant in
            // range (and numeric text) converts.
            impl TryFrom<Value> for $ty {
                type Error = crate::Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value.cast(Type::$variant)? {
                        Value::$variant(v) => Ok(v),
                        other => Err(crate::Error::type_conversion(other, $lit)),
                    }
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) "i8"
    I16(i16) "i16"
    I32(i32) "i32"
    I64(i64) "i64"
    U8(u8) "u8"
    U16(u16) "u16"
    U32(u32) "u32"
    U64(u64) "u64"
}

impl TryFrom<Value> for f32 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.cast(Type::F32)? {
            Value::F32(v) => Ok(v),
            other => Err(crate::Error::type_conversion(other, "f32")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.cast(Type::F64)? {
            Value::F64(v) => Ok(v),
            other => Err(crate::Error::type_conversion(other, "f64")),
        }
    }
}
