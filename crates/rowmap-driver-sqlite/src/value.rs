use rowmap_core::stmt::Value;
use rusqlite::types::{FromSqlError, Type, ValueRef};

/// Converts a SQLite cell into a value.
///
/// SQLite has no declared column types at read time, so integers come back
/// as `I64`, reals as `F64` and text as `String`. Mapping onto the entity's
/// field types happens when the row is loaded.
pub(crate) fn from_sql(cell: ValueRef<'_>) -> rusqlite::Result<Value> {
    Ok(match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::I64(v),
        ValueRef::Real(v) => Value::F64(v),
        ValueRef::Text(v) => match std::str::from_utf8(v) {
            Ok(text) => Value::String(text.to_string()),
            Err(err) => {
                return Err(rusqlite::Error::FromSqlConversionFailure(
                    0,
                    Type::Text,
                    Box::new(err),
                ))
            }
        },
        ValueRef::Blob(_) => {
            return Err(rusqlite::Error::FromSqlConversionFailure(
                0,
                Type::Blob,
                Box::new(FromSqlError::InvalidType),
            ))
        }
    })
}
