mod cast;

mod key;
pub use key::Key;

mod num;

mod result_set;
pub use result_set::{ResultSet, Row};

mod ty;
pub use ty::Type;

mod value;
pub use value::{Value, ValueEnum};

mod value_chrono;
