use super::{Error, ErrorKind};

/// Error when a statement is generated from field and value sequences of
/// different lengths.
#[derive(Debug)]
pub(super) struct DisparityError {
    fields: usize,
    values: usize,
}

impl std::error::Error for DisparityError {}

impl core::fmt::Display for DisparityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field/value disparity: {} fields but {} values",
            self.fields, self.values
        )
    }
}

impl Error {
    /// Creates an error reporting mismatched field and value counts.
    pub fn disparity(fields: usize, values: usize) -> Error {
        Error::from(ErrorKind::Disparity(DisparityError { fields, values }))
    }

    /// Returns `true` if this error, or any error it wraps, is a field/value
    /// disparity.
    pub fn is_disparity(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::Disparity(_)))
    }
}
