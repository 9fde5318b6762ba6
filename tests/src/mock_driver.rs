use crate::exec_log::ExecLog;
use rowmap::{
    driver::{Connection, Driver, Flavor, Operation, Response},
    stmt::{ResultSet, Value},
    Result,
};
use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// A driver that records every operation and answers from a queue of
/// canned responses.
///
/// When the queue is empty, statements get an empty answer of the right
/// shape: zero affected rows, a null scalar or an empty result set.
#[derive(Debug, Clone)]
pub struct MockDriver {
    flavor: Flavor,
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    /// Log of all operations executed through this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,

    responses: Mutex<VecDeque<Result<Response>>>,

    connects: Mutex<Vec<String>>,
}

#[derive(Debug)]
pub struct DriverOp {
    /// Connection string of the connection the operation ran on
    pub url: String,
    pub operation: Operation,
}

impl MockDriver {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            state: Arc::default(),
        }
    }

    /// Queues the answer to the next statement.
    pub fn respond(&self, response: Response) -> &Self {
        self.state
            .responses
            .lock()
            .unwrap()
            .push_back(Ok(response));
        self
    }

    /// Queues a failure for the next statement.
    pub fn fail(&self, err: rowmap::Error) -> &Self {
        self.state.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// Queues a result set with the given columns and rows.
    pub fn respond_rows<const N: usize>(&self, columns: [&str; N], rows: Vec<[Value; N]>) -> &Self {
        let mut set = ResultSet::new(columns);
        for row in rows {
            set.push(row.into()).unwrap();
        }
        self.respond(Response::set(set))
    }

    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.state.ops_log.clone())
    }

    /// Connection strings passed to `connect`, in order
    pub fn connects(&self) -> Vec<String> {
        self.state.connects.lock().unwrap().clone()
    }

    fn open(&self, url: &str) -> Box<dyn Connection> {
        self.state.connects.lock().unwrap().push(url.to_string());

        Box::new(MockConnection {
            url: url.to_string(),
            state: self.state.clone(),
        })
    }
}

#[async_trait]
impl Driver for MockDriver {
    fn flavor(&self) -> Flavor {
        self.flavor
    }

    async fn connect(&self, url: &str) -> Result<Box<dyn Connection>> {
        Ok(self.open(url))
    }

    fn connect_blocking(&self, url: &str) -> Result<Box<dyn Connection>> {
        Ok(self.open(url))
    }
}

#[derive(Debug)]
pub struct MockConnection {
    url: String,
    state: Arc<State>,
}

impl MockConnection {
    fn answer(&mut self, operation: Operation) -> Result<Response> {
        let canned = if operation.is_transaction() {
            None
        } else {
            self.state.responses.lock().unwrap().pop_front()
        };

        let response = canned.unwrap_or_else(|| {
            Ok(match &operation {
                Operation::NonQuery(_) | Operation::Transaction(_) => Response::count(0),
                Operation::Scalar(_) => Response::value(Value::Null),
                Operation::Reader(_) => Response::set(ResultSet::default()),
            })
        });

        self.state.ops_log.lock().unwrap().push(DriverOp {
            url: self.url.clone(),
            operation,
        });

        response
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        self.answer(operation)
    }

    fn exec_blocking(&mut self, operation: Operation) -> Result<Response> {
        self.answer(operation)
    }
}
