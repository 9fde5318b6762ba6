use crate::{
    driver::{operation::Transaction as TransactionOp, Connection},
    Result,
};

/// A transaction on a connection it owns.
///
/// Dropping a transaction without committing leaves rollback to the
/// backend, which discards the work when the connection closes.
#[derive(Debug)]
pub struct Transaction {
    connection: Box<dyn Connection>,
}

impl Transaction {
    /// Starts a transaction on `connection`.
    pub async fn begin(mut connection: Box<dyn Connection>) -> Result<Transaction> {
        connection.exec(TransactionOp::Start.into()).await?;
        Ok(Transaction { connection })
    }

    pub fn begin_blocking(mut connection: Box<dyn Connection>) -> Result<Transaction> {
        connection.exec_blocking(TransactionOp::Start.into())?;
        Ok(Transaction { connection })
    }

    pub async fn commit(mut self) -> Result<()> {
        self.connection.exec(TransactionOp::Commit.into()).await?;
        Ok(())
    }

    pub fn commit_blocking(mut self) -> Result<()> {
        self.connection.exec_blocking(TransactionOp::Commit.into())?;
        Ok(())
    }

    pub async fn rollback(mut self) -> Result<()> {
        self.connection.exec(TransactionOp::Rollback.into()).await?;
        Ok(())
    }

    pub fn rollback_blocking(mut self) -> Result<()> {
        self.connection
            .exec_blocking(TransactionOp::Rollback.into())?;
        Ok(())
    }

    pub(crate) fn connection(&mut self) -> &mut dyn Connection {
        &mut *self.connection
    }
}
