use super::{Error, ErrorKind};
use crate::stmt::Value;

/// Error when a value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    value: Value,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.value.kind_name(), self.to_type)
    }
}

impl Error {
    pub fn type_conversion(value: Value, to_type: &'static str) -> Error {
        Error::from(ErrorKind::TypeConversion(TypeConversionError { value, to_type }))
    }

    pub fn is_type_conversion(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::TypeConversion(_)))
    }
}
