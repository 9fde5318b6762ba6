use crate::{
    stmt::{ResultSet, Value},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// A single scalar, null when the statement produced no row
    Value(Value),

    /// Materialized rows
    Set(ResultSet),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            rows: Rows::Value(value.into()),
        }
    }

    pub fn set(rows: ResultSet) -> Self {
        Self {
            rows: Rows::Set(rows),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            // Some backends answer `SELECT COUNT(*)` through the scalar path.
            Rows::Value(value) => u64::try_from(value),
            Rows::Set(_) => Err(Error::invalid_result("expected a row count, got rows")),
        }
    }

    pub fn into_value(self) -> Result<Value> {
        match self {
            Rows::Value(value) => Ok(value),
            Rows::Count(_) => Err(Error::invalid_result("expected a scalar, got a row count")),
            Rows::Set(_) => Err(Error::invalid_result("expected a scalar, got rows")),
        }
    }

    pub fn into_set(self) -> Result<ResultSet> {
        match self {
            Rows::Set(rows) => Ok(rows),
            Rows::Count(_) => Err(Error::invalid_result("expected rows, got a row count")),
            Rows::Value(_) => Err(Error::invalid_result("expected rows, got a scalar")),
        }
    }
}
