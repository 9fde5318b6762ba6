use super::{Error, ErrorKind};

/// Error when a statement is generated without a table name.
#[derive(Debug)]
pub(super) struct InvalidTableError;

impl std::error::Error for InvalidTableError {}

impl core::fmt::Display for InvalidTableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("invalid table: table name is empty")
    }
}

impl Error {
    pub fn invalid_table() -> Error {
        Error::from(ErrorKind::InvalidTable(InvalidTableError))
    }

    pub fn is_invalid_table(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::InvalidTable(_)))
    }
}
