mod field;
pub use field::{Access, FieldDescriptor};

mod policy;
pub use policy::Policy;

mod tag;
pub use tag::{Tag, TagSet};
