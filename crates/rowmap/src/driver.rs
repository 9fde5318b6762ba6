pub use rowmap_core::driver::{
    operation::{self, Operation},
    Connection, Driver, Flavor, Response, Rows,
};

#[cfg(feature = "sqlite")]
pub use rowmap_driver_sqlite::Sqlite;
