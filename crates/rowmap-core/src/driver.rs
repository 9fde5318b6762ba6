mod flavor;
pub use flavor::Flavor;

pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, Result};

use std::fmt::Debug;

/// Opens connections to one kind of backend.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The SQL dialect the backend speaks.
    fn flavor(&self) -> Flavor;

    /// Opens a connection described by `url`.
    async fn connect(&self, url: &str) -> Result<Box<dyn Connection>>;

    /// Blocking twin of [`connect`](Self::connect).
    fn connect_blocking(&self, url: &str) -> Result<Box<dyn Connection>>;
}

/// An open connection that executes generated statements.
///
/// Backend failures are translated into the error taxonomy: connection
/// failures become [`Error::db_connection`](crate::Error::db_connection) and
/// unknown tables or columns become
/// [`Error::invalid_model`](crate::Error::invalid_model).
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;

    /// Blocking twin of [`exec`](Self::exec).
    fn exec_blocking(&mut self, op: Operation) -> Result<Response>;
}
