use rowmap_core::{Error, ModelObject};
use rusqlite::ErrorCode;

/// Translates a SQLite failure into the matching error kind.
///
/// Unknown tables and columns become invalid model errors carrying the name
/// SQLite reported. Failures to reach the database file become connection
/// errors. Everything else is a plain driver error.
pub(crate) fn translate(err: rusqlite::Error) -> Error {
    if let rusqlite::Error::SqliteFailure(failure, message) = &err {
        match failure.code {
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::PermissionDenied
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked => return Error::db_connection(err),
            _ => {}
        }

        if let Some(message) = message {
            if let Some(err) = missing_object(message) {
                return err;
            }
        }
    }

    Error::driver(err)
}

fn missing_object(message: &str) -> Option<Error> {
    const PATTERNS: &[(&str, ModelObject)] = &[
        ("no such table: ", ModelObject::Table),
        ("no such column: ", ModelObject::Column),
        (" has no column named ", ModelObject::Column),
    ];

    PATTERNS.iter().find_map(|(pattern, object)| {
        let (_, rest) = message.split_once(pattern)?;
        let name = rest.split_whitespace().next()?;
        let name = name.rsplit('.').next().unwrap_or(name);
        Some(Error::invalid_model(*object, name))
    })
}
