use super::{Error, ErrorKind};

/// The kind of schema object the backend reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelObject {
    Table,
    Column,
}

/// Error when the entity declaration and the physical schema disagree.
#[derive(Debug)]
pub(super) struct InvalidModelError {
    object: ModelObject,
    name: Box<str>,
}

impl std::error::Error for InvalidModelError {}

impl core::fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let object = match self.object {
            ModelObject::Table => "table",
            ModelObject::Column => "column",
        };
        write!(f, "invalid model: {object} `{}` does not exist", self.name)
    }
}

impl Error {
    /// Creates an error for a table or column the backend does not know.
    ///
    /// `name` is the offending name as extracted from the backend message.
    pub fn invalid_model(object: ModelObject, name: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidModel(InvalidModelError {
            object,
            name: name.into().into(),
        }))
    }

    pub fn is_invalid_model(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::InvalidModel(_)))
    }

    /// Returns the missing table or column name, if this is an invalid model
    /// error.
    pub fn invalid_model_name(&self) -> Option<&str> {
        self.find(|kind| match kind {
            ErrorKind::InvalidModel(err) => Some(&err.name),
            _ => None,
        })
        .map(|name| &**name)
    }

    /// Returns which kind of object was missing, if this is an invalid model
    /// error.
    pub fn invalid_model_object(&self) -> Option<ModelObject> {
        self.find(|kind| match kind {
            ErrorKind::InvalidModel(err) => Some(&err.object),
            _ => None,
        })
        .copied()
    }
}
