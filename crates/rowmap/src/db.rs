mod builder;
pub use builder::Builder;

mod session;
pub use session::Session;

mod transaction;
pub use transaction::Transaction;

use crate::{
    driver::{Connection, Driver},
    err,
    stmt::{Key, Predicate, ResultSet},
    Entity, Generator, Listener, Result,
};

use std::{fmt, sync::Arc};

/// A handle to a database: a driver, the default connection string, and the
/// registered listeners.
///
/// `Db` is cheap to clone. Every lifecycle method opens a connection from
/// the default connection string, runs one statement, and drops the
/// connection. Use [`Db::with_connection`] or [`Db::with_transaction`] to run
/// on a connection the caller owns.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

struct Shared {
    driver: Arc<dyn Driver>,

    /// Default connection string
    url: Option<String>,

    generator: Generator,

    listeners: Vec<Arc<dyn Listener>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    /// The default connection string, if one was configured.
    pub fn connection_string(&self) -> Option<&str> {
        self.shared.url.as_deref()
    }

    pub fn generator(&self) -> &Generator {
        &self.shared.generator
    }

    pub(crate) fn listeners(&self) -> &[Arc<dyn Listener>] {
        &self.shared.listeners
    }

    /// Runs operations on fresh connections opened from the entity's data
    /// source or the default connection string.
    pub fn session(&self) -> Session<'_> {
        Session::new(self, session::Target::Default)
    }

    /// Runs operations on a connection the caller opened.
    pub fn with_connection<'a>(&'a self, connection: &'a mut dyn Connection) -> Session<'a> {
        Session::new(self, session::Target::Connection(connection))
    }

    /// Runs operations inside a transaction the caller started.
    pub fn with_transaction<'a>(&'a self, transaction: &'a mut Transaction) -> Session<'a> {
        Session::new(self, session::Target::Transaction(transaction))
    }

    /// Opens a connection from the default connection string.
    pub async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.shared.driver.connect(self.url()?).await
    }

    pub fn connect_blocking(&self) -> Result<Box<dyn Connection>> {
        self.shared.driver.connect_blocking(self.url()?)
    }

    /// Opens a connection and starts a transaction on it.
    pub async fn begin(&self) -> Result<Transaction> {
        Transaction::begin(self.connect().await?).await
    }

    pub fn begin_blocking(&self) -> Result<Transaction> {
        Transaction::begin_blocking(self.connect_blocking()?)
    }

    fn url(&self) -> Result<&str> {
        self.connection_string()
            .ok_or_else(|| err!("no default connection string configured"))
    }

    pub async fn get<E: Entity>(&self, key: &Key) -> Result<Option<E>> {
        self.session().get(key).await
    }

    pub fn get_blocking<E: Entity>(&self, key: &Key) -> Result<Option<E>> {
        self.session().get_blocking(key)
    }

    pub async fn get_by<E: Entity>(&self, model: &E) -> Result<Option<E>> {
        self.session().get_by(model).await
    }

    pub fn get_by_blocking<E: Entity>(&self, model: &E) -> Result<Option<E>> {
        self.session().get_by_blocking(model)
    }

    pub async fn query<E: Entity>(&self, predicate: &Predicate) -> Result<Vec<E>> {
        self.session().query(predicate).await
    }

    pub fn query_blocking<E: Entity>(&self, predicate: &Predicate) -> Result<Vec<E>> {
        self.session().query_blocking(predicate)
    }

    pub async fn query_table<E: Entity>(&self, predicate: &Predicate) -> Result<ResultSet> {
        self.session().query_table::<E>(predicate).await
    }

    pub fn query_table_blocking<E: Entity>(&self, predicate: &Predicate) -> Result<ResultSet> {
        self.session().query_table_blocking::<E>(predicate)
    }

    pub async fn query_displayable<E: Entity>(&self, predicate: &Predicate) -> Result<Vec<E>> {
        self.session().query_displayable(predicate).await
    }

    pub fn query_displayable_blocking<E: Entity>(&self, predicate: &Predicate) -> Result<Vec<E>> {
        self.session().query_displayable_blocking(predicate)
    }

    pub async fn count<E: Entity>(&self, predicate: &Predicate) -> Result<u64> {
        self.session().count::<E>(predicate).await
    }

    pub fn count_blocking<E: Entity>(&self, predicate: &Predicate) -> Result<u64> {
        self.session().count_blocking::<E>(predicate)
    }

    pub async fn insert<E: Entity>(&self, entity: &mut E) -> Result<bool> {
        self.session().insert(entity).await
    }

    pub fn insert_blocking<E: Entity>(&self, entity: &mut E) -> Result<bool> {
        self.session().insert_blocking(entity)
    }

    pub async fn update<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.session().update(entity).await
    }

    pub fn update_blocking<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.session().update_blocking(entity)
    }

    pub async fn delete<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.session().delete(entity).await
    }

    pub fn delete_blocking<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.session().delete_blocking(entity)
    }

    pub async fn is_duplicated<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.session().is_duplicated(entity).await
    }

    pub fn is_duplicated_blocking<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.session().is_duplicated_blocking(entity)
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.shared.driver)
            .field("url", &self.shared.url)
            .field("flavor", &self.shared.generator.flavor())
            .field("listeners", &self.shared.listeners.len())
            .finish()
    }
}
