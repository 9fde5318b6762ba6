mod resolve;
pub use resolve::{columns, duplication_groups, resolve_fields, resolve_key};
pub(crate) use resolve::pairs;

pub use rowmap_core::schema::{Access, FieldDescriptor, Policy, Tag, TagSet};
