use super::{Error, ErrorKind};

/// Error when a primary key component evaluates to null.
#[derive(Debug)]
pub(super) struct InvalidKeyError {
    column: Box<str>,
}

impl std::error::Error for InvalidKeyError {}

impl core::fmt::Display for InvalidKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid key: component `{}` is null", self.column)
    }
}

impl Error {
    /// Creates an error for a null primary key component.
    pub fn invalid_key(column: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidKey(InvalidKeyError {
            column: column.into().into(),
        }))
    }

    pub fn is_invalid_key(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::InvalidKey(_)))
    }
}
