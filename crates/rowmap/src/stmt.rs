mod predicate;
pub use predicate::{Arg, Predicate};

mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

pub use rowmap_core::stmt::{Key, ResultSet, Row, Type, Value, ValueEnum};
