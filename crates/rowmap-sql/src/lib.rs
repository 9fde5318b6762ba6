pub mod serializer;
pub use serializer::{literal, FieldValues, Generator, Literal, Parallel};
