mod error;
mod value;

use rowmap_core::{
    async_trait,
    driver::{
        operation::{Operation, Transaction},
        Flavor, Response,
    },
    stmt::ResultSet,
    Driver, Error, Result,
};
use rusqlite::{Connection as RusqliteConnection, OptionalExtension};
use std::path::{Path, PathBuf};
use url::Url;

/// SQLite driver.
///
/// Connection strings are URLs with a `sqlite` scheme: `sqlite::memory:`
/// for a private in-memory database, `sqlite:<path>` for a file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sqlite;

/// Where a connection string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    InMemory,
}

impl Location {
    pub fn parse(url: &str) -> Result<Location> {
        let parsed = Url::parse(url).map_err(Error::db_connection)?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::db_connection(UnsupportedScheme(url.to_string())));
        }

        if parsed.path() == ":memory:" {
            Ok(Location::InMemory)
        } else {
            Ok(Location::File(PathBuf::from(parsed.path())))
        }
    }
}

impl Sqlite {
    fn open(&self, url: &str) -> Result<Connection> {
        let connection = match Location::parse(url)? {
            Location::File(path) => Connection::open(path)?,
            Location::InMemory => Connection::in_memory()?,
        };

        tracing::debug!(url, "opened sqlite connection");

        Ok(connection)
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    async fn connect(&self, url: &str) -> Result<Box<dyn rowmap_core::Connection>> {
        Ok(Box::new(self.open(url)?))
    }

    fn connect_blocking(&self, url: &str) -> Result<Box<dyn rowmap_core::Connection>> {
        Ok(Box::new(self.open(url)?))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::db_connection)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::db_connection)?;

        Ok(Self { connection })
    }

    /// Runs a batch of statements, such as a schema script.
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(error::translate)
    }

    fn run(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Transaction(Transaction::Start) => self.transaction("BEGIN"),
            Operation::Transaction(Transaction::Commit) => self.transaction("COMMIT"),
            Operation::Transaction(Transaction::Rollback) => self.transaction("ROLLBACK"),
            Operation::NonQuery(sql) => {
                let count = self
                    .connection
                    .execute(&sql, [])
                    .map_err(error::translate)?;

                Ok(Response::count(count as u64))
            }
            Operation::Scalar(sql) => {
                let value = self
                    .connection
                    .query_row(&sql, [], |row| value::from_sql(row.get_ref(0)?))
                    .optional()
                    .map_err(error::translate)?;

                Ok(Response::value(value.unwrap_or_default()))
            }
            Operation::Reader(sql) => self.reader(&sql),
        }
    }

    fn transaction(&mut self, sql: &str) -> Result<Response> {
        self.connection.execute(sql, []).map_err(error::translate)?;
        Ok(Response::count(0))
    }

    fn reader(&mut self, sql: &str) -> Result<Response> {
        let mut stmt = self.connection.prepare(sql).map_err(error::translate)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let mut set = ResultSet::new(columns);
        let mut rows = stmt.query([]).map_err(error::translate)?;

        while let Some(row) = rows.next().map_err(error::translate)? {
            let mut cells = Vec::with_capacity(width);

            for index in 0..width {
                let cell = row.get_ref(index).map_err(error::translate)?;
                cells.push(value::from_sql(cell).map_err(error::translate)?);
            }

            set.push(cells)?;
        }

        Ok(Response::set(set))
    }
}

#[async_trait]
impl rowmap_core::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        self.run(op)
    }

    fn exec_blocking(&mut self, op: Operation) -> Result<Response> {
        self.run(op)
    }
}

#[derive(Debug)]
struct UnsupportedScheme(String);

impl std::error::Error for UnsupportedScheme {}

impl std::fmt::Display for UnsupportedScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "connection URL does not have a `sqlite` scheme; url={}",
            self.0
        )
    }
}
