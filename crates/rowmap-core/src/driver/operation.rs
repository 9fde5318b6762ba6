mod transaction;
pub use transaction::Transaction;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Execute a statement and report the number of affected rows.
    NonQuery(String),

    /// Execute a statement and return the first cell of the first row.
    Scalar(String),

    /// Execute a query and return all rows.
    Reader(String),

    /// Execute a transaction lifecycle op
    Transaction(Transaction),
}

impl Operation {
    /// The SQL text, for statement operations.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Operation::NonQuery(sql) | Operation::Scalar(sql) | Operation::Reader(sql) => {
                Some(sql)
            }
            Operation::Transaction(_) => None,
        }
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, Operation::Transaction(_))
    }
}
