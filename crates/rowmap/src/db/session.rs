use super::{Db, Transaction};
use crate::{
    driver::{Connection, Operation, Response},
    engine, err,
    listener::{Context, Event},
    load,
    schema::{self, Policy},
    stmt::{Key, Predicate, ResultSet},
    Entity, Listener, Result,
};

/// One execution context for lifecycle operations.
///
/// Sessions are created by [`Db::session`], [`Db::with_connection`] and
/// [`Db::with_transaction`]. Every operation comes in an async and a
/// `_blocking` form; both generate the same SQL.
#[derive(Debug)]
pub struct Session<'a> {
    db: &'a Db,
    target: Target<'a>,
}

#[derive(Debug)]
pub(crate) enum Target<'a> {
    /// Open a connection per operation
    Default,

    Connection(&'a mut dyn Connection),

    Transaction(&'a mut Transaction),
}

impl<'a> Session<'a> {
    pub(crate) fn new(db: &'a Db, target: Target<'a>) -> Session<'a> {
        Session { db, target }
    }

    /// Loads the entity with the given primary key.
    ///
    /// Returns `None` and notifies `get_failed` when no row matches.
    pub async fn get<E: Entity>(&mut self, key: &Key) -> Result<Option<E>> {
        let sql = engine::get::<E>(self.db.generator(), key)?;
        let response = self.exec::<E>(Operation::Reader(sql.clone())).await?;
        self.finish_get(&sql, response)
    }

    pub fn get_blocking<E: Entity>(&mut self, key: &Key) -> Result<Option<E>> {
        let sql = engine::get::<E>(self.db.generator(), key)?;
        let response = self.exec_blocking::<E>(Operation::Reader(sql.clone()))?;
        self.finish_get(&sql, response)
    }

    /// Loads the stored version of `model`, looked up by its primary key.
    pub async fn get_by<E: Entity>(&mut self, model: &E) -> Result<Option<E>> {
        let key = model.key()?;
        self.get(&key).await
    }

    pub fn get_by_blocking<E: Entity>(&mut self, model: &E) -> Result<Option<E>> {
        let key = model.key()?;
        self.get_blocking(&key)
    }

    /// Loads every row matching `predicate`.
    pub async fn query<E: Entity>(&mut self, predicate: &Predicate) -> Result<Vec<E>> {
        let sql = engine::query::<E>(self.db.generator(), Policy::SELECT, predicate)?;
        let response = self.exec::<E>(Operation::Reader(sql.clone())).await?;
        self.finish_query(&sql, response, Policy::SELECT)
    }

    pub fn query_blocking<E: Entity>(&mut self, predicate: &Predicate) -> Result<Vec<E>> {
        let sql = engine::query::<E>(self.db.generator(), Policy::SELECT, predicate)?;
        let response = self.exec_blocking::<E>(Operation::Reader(sql.clone()))?;
        self.finish_query(&sql, response, Policy::SELECT)
    }

    /// Like [`query`](Self::query), but returns the raw rows.
    pub async fn query_table<E: Entity>(&mut self, predicate: &Predicate) -> Result<ResultSet> {
        let sql = engine::query::<E>(self.db.generator(), Policy::SELECT, predicate)?;
        let response = self.exec::<E>(Operation::Reader(sql.clone())).await?;
        self.finish_query_table::<E>(&sql, response)
    }

    pub fn query_table_blocking<E: Entity>(&mut self, predicate: &Predicate) -> Result<ResultSet> {
        let sql = engine::query::<E>(self.db.generator(), Policy::SELECT, predicate)?;
        let response = self.exec_blocking::<E>(Operation::Reader(sql.clone()))?;
        self.finish_query_table::<E>(&sql, response)
    }

    /// Like [`query`](Self::query), reading only the displayable fields.
    pub async fn query_displayable<E: Entity>(
        &mut self,
        predicate: &Predicate,
    ) -> Result<Vec<E>> {
        let sql = engine::query::<E>(self.db.generator(), Policy::DISPLAY, predicate)?;
        let response = self.exec::<E>(Operation::Reader(sql.clone())).await?;
        self.finish_query(&sql, response, Policy::DISPLAY)
    }

    pub fn query_displayable_blocking<E: Entity>(
        &mut self,
        predicate: &Predicate,
    ) -> Result<Vec<E>> {
        let sql = engine::query::<E>(self.db.generator(), Policy::DISPLAY, predicate)?;
        let response = self.exec_blocking::<E>(Operation::Reader(sql.clone()))?;
        self.finish_query(&sql, response, Policy::DISPLAY)
    }

    /// Counts the rows matching `predicate`.
    pub async fn count<E: Entity>(&mut self, predicate: &Predicate) -> Result<u64> {
        let sql = engine::count::<E>(self.db.generator(), predicate)?;
        self.exec::<E>(Operation::Scalar(sql)).await?.rows.into_count()
    }

    pub fn count_blocking<E: Entity>(&mut self, predicate: &Predicate) -> Result<u64> {
        let sql = engine::count::<E>(self.db.generator(), predicate)?;
        self.exec_blocking::<E>(Operation::Scalar(sql))?
            .rows
            .into_count()
    }

    /// Inserts `entity`, populating its identity field if it has one.
    ///
    /// Returns whether a row was written. If the identity returned by the
    /// backend cannot be converted to the field's type, the row has already
    /// been written: the error is returned, the field keeps its value, and
    /// neither `insert_succeeded` nor `insert_failed` is notified.
    pub async fn insert<E: Entity>(&mut self, entity: &mut E) -> Result<bool> {
        let Some(plan) = engine::insert(self.db.generator(), &*entity)? else {
            return Ok(self.nothing_to_write::<E>(|l, e| l.insert_failed(e)));
        };

        self.notify::<E>(&plan.sql, 0, |l, e| l.before_insert(e));
        let response = self.exec::<E>(plan.operation()).await?;
        self.finish_insert(entity, &plan, response)
    }

    pub fn insert_blocking<E: Entity>(&mut self, entity: &mut E) -> Result<bool> {
        let Some(plan) = engine::insert(self.db.generator(), &*entity)? else {
            return Ok(self.nothing_to_write::<E>(|l, e| l.insert_failed(e)));
        };

        self.notify::<E>(&plan.sql, 0, |l, e| l.before_insert(e));
        let response = self.exec_blocking::<E>(plan.operation())?;
        self.finish_insert(entity, &plan, response)
    }

    /// Writes every updatable, non-key field of `entity` to the row with the
    /// same primary key.
    ///
    /// Returns whether a row was changed.
    pub async fn update<E: Entity>(&mut self, entity: &E) -> Result<bool> {
        let Some(sql) = engine::update(self.db.generator(), entity)? else {
            return Ok(self.nothing_to_write::<E>(|l, e| l.update_failed(e)));
        };

        self.notify::<E>(&sql, 0, |l, e| l.before_update(e));
        let response = self.exec::<E>(Operation::NonQuery(sql.clone())).await?;
        self.finish_write::<E>(&sql, response, |l, e| l.update_succeeded(e), |l, e| {
            l.update_failed(e)
        })
    }

    pub fn update_blocking<E: Entity>(&mut self, entity: &E) -> Result<bool> {
        let Some(sql) = engine::update(self.db.generator(), entity)? else {
            return Ok(self.nothing_to_write::<E>(|l, e| l.update_failed(e)));
        };

        self.notify::<E>(&sql, 0, |l, e| l.before_update(e));
        let response = self.exec_blocking::<E>(Operation::NonQuery(sql.clone()))?;
        self.finish_write::<E>(&sql, response, |l, e| l.update_succeeded(e), |l, e| {
            l.update_failed(e)
        })
    }

    /// Deletes the row with `entity`'s primary key.
    ///
    /// Returns whether a row was removed.
    pub async fn delete<E: Entity>(&mut self, entity: &E) -> Result<bool> {
        let sql = engine::delete(self.db.generator(), entity)?;

        self.notify::<E>(&sql, 0, |l, e| l.before_delete(e));
        let response = self.exec::<E>(Operation::NonQuery(sql.clone())).await?;
        self.finish_write::<E>(&sql, response, |l, e| l.delete_succeeded(e), |l, e| {
            l.delete_failed(e)
        })
    }

    pub fn delete_blocking<E: Entity>(&mut self, entity: &E) -> Result<bool> {
        let sql = engine::delete(self.db.generator(), entity)?;

        self.notify::<E>(&sql, 0, |l, e| l.before_delete(e));
        let response = self.exec_blocking::<E>(Operation::NonQuery(sql.clone()))?;
        self.finish_write::<E>(&sql, response, |l, e| l.delete_succeeded(e), |l, e| {
            l.delete_failed(e)
        })
    }

    /// Whether a row already matches `entity` on every duplication group.
    ///
    /// Entities without duplication groups are never duplicated.
    pub async fn is_duplicated<E: Entity>(&mut self, entity: &E) -> Result<bool> {
        let Some(sql) = engine::is_duplicated(self.db.generator(), entity)? else {
            return Ok(false);
        };

        let count = self.exec::<E>(Operation::Scalar(sql)).await?.rows.into_count()?;
        Ok(count > 0)
    }

    pub fn is_duplicated_blocking<E: Entity>(&mut self, entity: &E) -> Result<bool> {
        let Some(sql) = engine::is_duplicated(self.db.generator(), entity)? else {
            return Ok(false);
        };

        let count = self
            .exec_blocking::<E>(Operation::Scalar(sql))?
            .rows
            .into_count()?;
        Ok(count > 0)
    }

    async fn exec<E: Entity>(&mut self, op: Operation) -> Result<Response> {
        tracing::debug!(
            table = E::TABLE,
            sql = op.sql().unwrap_or_default(),
            "executing statement"
        );

        match &mut self.target {
            Target::Default => {
                let url = default_url::<E>(self.db)?;
                let mut connection = self.db.driver().connect(url).await?;
                connection.exec(op).await
            }
            Target::Connection(connection) => connection.exec(op).await,
            Target::Transaction(transaction) => transaction.connection().exec(op).await,
        }
    }

    fn exec_blocking<E: Entity>(&mut self, op: Operation) -> Result<Response> {
        tracing::debug!(
            table = E::TABLE,
            sql = op.sql().unwrap_or_default(),
            "executing statement"
        );

        match &mut self.target {
            Target::Default => {
                let url = default_url::<E>(self.db)?;
                let mut connection = self.db.driver().connect_blocking(url)?;
                connection.exec_blocking(op)
            }
            Target::Connection(connection) => connection.exec_blocking(op),
            Target::Transaction(transaction) => transaction.connection().exec_blocking(op),
        }
    }

    fn context<E: Entity>(&self) -> Context<'_> {
        match &self.target {
            Target::Default => {
                Context::ConnectionString(default_url::<E>(self.db).unwrap_or_default())
            }
            Target::Connection(connection) => Context::Connection(&**connection),
            Target::Transaction(transaction) => Context::Transaction(&**transaction),
        }
    }

    fn notify<E: Entity>(&self, sql: &str, rows: u64, f: impl Fn(&dyn Listener, &Event<'_>)) {
        let event = Event {
            table: E::TABLE,
            sql,
            rows,
            context: self.context::<E>(),
        };

        for listener in self.db.listeners() {
            f(&**listener, &event);
        }
    }

    /// Reports a write that had no field to write. Nothing is executed.
    fn nothing_to_write<E: Entity>(&self, failed: impl Fn(&dyn Listener, &Event<'_>)) -> bool {
        tracing::debug!(table = E::TABLE, "no fields to write; skipping statement");
        self.notify::<E>("", 0, failed);
        false
    }

    fn finish_get<E: Entity>(&self, sql: &str, response: Response) -> Result<Option<E>> {
        let rows = response.rows.into_set()?;

        let Some(row) = rows.row(0) else {
            self.notify::<E>(sql, 0, |l, e| l.get_failed(e));
            return Ok(None);
        };

        let entity = load::load_row(row, schema::resolve_fields::<E>(Policy::SELECT))?;
        self.notify::<E>(sql, rows.len() as u64, |l, e| l.get_succeeded(e));
        Ok(Some(entity))
    }

    fn finish_query_table<E: Entity>(&self, sql: &str, response: Response) -> Result<ResultSet> {
        let rows = response.rows.into_set()?;

        if rows.is_empty() {
            self.notify::<E>(sql, 0, |l, e| l.select_failed(e));
        } else {
            self.notify::<E>(sql, rows.len() as u64, |l, e| l.select_succeeded(e));
        }

        Ok(rows)
    }

    fn finish_query<E: Entity>(
        &self,
        sql: &str,
        response: Response,
        policy: Policy,
    ) -> Result<Vec<E>> {
        let rows = self.finish_query_table::<E>(sql, response)?;
        load::load_rows(&rows, schema::resolve_fields::<E>(policy))
    }

    fn finish_insert<E: Entity>(
        &self,
        entity: &mut E,
        plan: &engine::Insert,
        response: Response,
    ) -> Result<bool> {
        let (written, rows) = match plan.identity {
            Some(index) => {
                let identity = response.rows.into_value()?;

                if identity.is_null() {
                    (false, 0)
                } else {
                    entity.set_value(index, identity)?;
                    (true, 1)
                }
            }
            None => {
                let count = response.rows.into_count()?;
                (count > 0, count)
            }
        };

        if written {
            self.notify::<E>(&plan.sql, rows, |l, e| l.insert_succeeded(e));
        } else {
            self.notify::<E>(&plan.sql, rows, |l, e| l.insert_failed(e));
        }

        Ok(written)
    }

    fn finish_write<E: Entity>(
        &self,
        sql: &str,
        response: Response,
        succeeded: impl Fn(&dyn Listener, &Event<'_>),
        failed: impl Fn(&dyn Listener, &Event<'_>),
    ) -> Result<bool> {
        let count = response.rows.into_count()?;

        if count > 0 {
            self.notify::<E>(sql, count, succeeded);
        } else {
            self.notify::<E>(sql, count, failed);
        }

        Ok(count > 0)
    }
}

/// The entity's own data source, else the database default.
fn default_url<E: Entity>(db: &Db) -> Result<&str> {
    E::data_source()
        .or_else(|| db.connection_string())
        .ok_or_else(|| {
            err!(
                "no connection string for `{}`: configure a default or declare a data source",
                E::TABLE
            )
        })
}
