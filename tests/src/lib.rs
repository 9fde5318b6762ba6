mod exec_log;
pub use exec_log::ExecLog;

mod mock_driver;
pub use mock_driver::{DriverOp, MockDriver};

pub mod models;

mod recording_listener;
pub use recording_listener::{Notification, RecordingListener, Scope};

use rowmap::{driver::Flavor, Db};

/// Connection string the mock databases are built with.
pub const URL: &str = "mock://default";

/// Installs a `tracing` subscriber honoring `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A test database backed by [`MockDriver`].
pub struct Setup {
    pub db: Db,
    pub driver: MockDriver,
    pub listener: RecordingListener,
}

impl Setup {
    pub fn new() -> Setup {
        Setup::with_flavor(Flavor::SqlServer)
    }

    pub fn with_flavor(flavor: Flavor) -> Setup {
        init_tracing();

        let driver = MockDriver::new(flavor);
        let listener = RecordingListener::default();

        let db = Db::builder()
            .driver(driver.clone())
            .connection_string(URL)
            .listener(listener.clone())
            .build()
            .unwrap();

        Setup {
            db,
            driver,
            listener,
        }
    }

    pub fn log(&self) -> ExecLog {
        self.driver.log()
    }
}

impl Default for Setup {
    fn default() -> Self {
        Setup::new()
    }
}
