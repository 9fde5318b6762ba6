// Lets the derive output, which refers to `rowmap::...`, resolve inside this
// crate's own tests.
extern crate self as rowmap;

pub mod db;
pub use db::{Db, Session, Transaction};

pub mod driver;

mod engine;

mod entity;
pub use entity::Entity;

pub mod listener;
pub use listener::{Context, Event, Listener};

mod load;
pub use load::{load_row, load_rows};

pub mod schema;

pub mod stmt;
pub use stmt::{Arg, Predicate, Primitive};

pub use rowmap_macros::{Entity, Enum};

pub use rowmap_core::{bail, err, Error, Result};

pub use rowmap_sql::{literal, FieldValues, Generator, Parallel};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        schema::resolve_key,
        stmt::{Key, Primitive, Type, Value, ValueEnum},
        Entity, Error, Result,
    };
    pub use rowmap_core::schema::{Access, FieldDescriptor, Tag};
    pub use std::{default::Default, option::Option};
}
