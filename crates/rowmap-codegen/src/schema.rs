mod column;
pub(crate) use column::{Access, Column};

mod enum_model;
pub(crate) use enum_model::EnumModel;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldAttr, Tag};

mod key_attr;
pub(crate) use key_attr::KeyAttr;

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;
