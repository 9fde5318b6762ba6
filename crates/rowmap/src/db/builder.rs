use super::{Db, Shared};
use crate::{
    driver::{Driver, Flavor},
    err, Generator, Listener, Result,
};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    driver: Option<Arc<dyn Driver>>,

    /// Default connection string
    url: Option<String>,

    /// Overrides the flavor reported by the driver
    flavor: Option<Flavor>,

    listeners: Vec<Arc<dyn Listener>>,
}

impl Builder {
    pub fn driver(&mut self, driver: impl Driver) -> &mut Self {
        self.driver = Some(Arc::new(driver));
        self
    }

    /// Connection string used when an operation runs without a caller
    /// supplied connection and the entity declares no data source.
    pub fn connection_string(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = Some(flavor);
        self
    }

    pub fn listener(&mut self, listener: impl Listener) -> &mut Self {
        self.listeners.push(Arc::new(listener));
        self
    }

    pub fn build(&mut self) -> Result<Db> {
        let driver = self
            .driver
            .clone()
            .ok_or_else(|| err!("a driver is required to build a `Db`"))?;

        let flavor = self.flavor.unwrap_or_else(|| driver.flavor());

        Ok(Db {
            shared: Arc::new(Shared {
                driver,
                url: self.url.clone(),
                generator: Generator::new(flavor),
                listeners: self.listeners.clone(),
            }),
        })
    }
}
