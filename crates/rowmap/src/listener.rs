use crate::{db::Transaction, driver::Connection};

/// Observes the outcome of lifecycle operations.
///
/// Every method has a no-op default, so implementors only override the
/// notifications they care about. Listeners are registered through
/// [`Builder::listener`](crate::db::Builder::listener) and run in
/// registration order on the calling task.
pub trait Listener: Send + Sync + 'static {
    fn before_insert(&self, _event: &Event<'_>) {}

    fn insert_succeeded(&self, _event: &Event<'_>) {}

    fn insert_failed(&self, _event: &Event<'_>) {}

    fn before_update(&self, _event: &Event<'_>) {}

    fn update_succeeded(&self, _event: &Event<'_>) {}

    fn update_failed(&self, _event: &Event<'_>) {}

    fn before_delete(&self, _event: &Event<'_>) {}

    fn delete_succeeded(&self, _event: &Event<'_>) {}

    fn delete_failed(&self, _event: &Event<'_>) {}

    fn get_succeeded(&self, _event: &Event<'_>) {}

    /// Called when a lookup by key finds no row.
    fn get_failed(&self, _event: &Event<'_>) {}

    fn select_succeeded(&self, _event: &Event<'_>) {}

    /// Called when a query returns no rows.
    fn select_failed(&self, _event: &Event<'_>) {}
}

/// What a notification is about.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Table the statement targets
    pub table: &'a str,

    /// The generated statement text; empty when nothing was executed
    pub sql: &'a str,

    /// Rows returned or affected; zero for `before_*` notifications
    pub rows: u64,

    /// Where the statement ran
    pub context: Context<'a>,
}

/// The execution context an operation ran in, as supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub enum Context<'a> {
    /// A fresh connection opened from this connection string
    ConnectionString(&'a str),

    /// A caller-owned open connection
    Connection(&'a dyn Connection),

    /// A caller-owned transaction
    Transaction(&'a Transaction),
}

impl Context<'_> {
    pub fn connection_string(&self) -> Option<&str> {
        match self {
            Context::ConnectionString(url) => Some(url),
            _ => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Context::Connection(_))
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, Context::Transaction(_))
    }
}
