use super::{Error, ErrorKind};

/// Error when the backend is unreachable, rejects the login, or times out.
#[derive(Debug)]
pub(super) struct DbConnectionError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DbConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DbConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "database connection failed: {}", self.inner)
    }
}

impl Error {
    /// Creates a connection error wrapping the driver's own error.
    pub fn db_connection(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::DbConnection(DbConnectionError {
            inner: Box::new(err),
        }))
    }

    pub fn is_db_connection(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::DbConnection(_)))
    }
}
