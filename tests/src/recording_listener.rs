use rowmap::{Context, Event, Listener};
use std::sync::{Arc, Mutex};

/// Which notification fired, and with what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub name: &'static str,
    pub table: String,
    pub sql: String,
    pub rows: u64,
    pub scope: Scope,
}

/// The execution context of a notification, detached from its borrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    ConnectionString(String),
    Connection,
    Transaction,
}

/// Records every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().unwrap().clone()
    }

    /// Names of the notifications received, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.name)
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, name: &'static str, event: &Event<'_>) {
        let scope = match event.context {
            Context::ConnectionString(url) => Scope::ConnectionString(url.to_string()),
            Context::Connection(_) => Scope::Connection,
            Context::Transaction(_) => Scope::Transaction,
        };

        self.events.lock().unwrap().push(Notification {
            name,
            table: event.table.to_string(),
            sql: event.sql.to_string(),
            rows: event.rows,
            scope,
        });
    }
}

impl Listener for RecordingListener {
    fn before_insert(&self, event: &Event<'_>) {
        self.record("before_insert", event);
    }

    fn insert_succeeded(&self, event: &Event<'_>) {
        self.record("insert_succeeded", event);
    }

    fn insert_failed(&self, event: &Event<'_>) {
        self.record("insert_failed", event);
    }

    fn before_update(&self, event: &Event<'_>) {
        self.record("before_update", event);
    }

    fn update_succeeded(&self, event: &Event<'_>) {
        self.record("update_succeeded", event);
    }

    fn update_failed(&self, event: &Event<'_>) {
        self.record("update_failed", event);
    }

    fn before_delete(&self, event: &Event<'_>) {
        self.record("before_delete", event);
    }

    fn delete_succeeded(&self, event: &Event<'_>) {
        self.record("delete_succeeded", event);
    }

    fn delete_failed(&self, event: &Event<'_>) {
        self.record("delete_failed", event);
    }

    fn get_succeeded(&self, event: &Event<'_>) {
        self.record("get_succeeded", event);
    }

    fn get_failed(&self, event: &Event<'_>) {
        self.record("get_failed", event);
    }

    fn select_succeeded(&self, event: &Event<'_>) {
        self.record("select_succeeded", event);
    }

    fn select_failed(&self, event: &Event<'_>) {
        self.record("select_failed", event);
    }
}
