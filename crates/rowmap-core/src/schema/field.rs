use super::{Tag, TagSet};
use crate::stmt::Type;

/// How a field may be used by generated statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Access {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

/// Static metadata describing one field of an entity.
///
/// Descriptors are usually emitted by `#[derive(Entity)]` into a `static`
/// slice, so every builder method is `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field name
    pub name: &'static str,

    /// Column name, when it differs from the field name
    pub column: Option<&'static str>,

    /// Declared value type
    pub ty: Type,

    /// True if the field accepts null (`Option<T>` in Rust)
    pub nullable: bool,

    pub access: Access,

    pub tags: TagSet,

    /// Group index, for fields tagged [`Tag::Duplication`]
    pub duplication_group: Option<u32>,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, ty: Type) -> FieldDescriptor {
        FieldDescriptor {
            name,
            column: None,
            ty,
            nullable: false,
            access: Access::ReadWrite,
            tags: TagSet::EMPTY,
            duplication_group: None,
        }
    }

    pub const fn column(mut self, column: &'static str) -> FieldDescriptor {
        self.column = Some(column);
        self
    }

    pub const fn nullable(mut self, nullable: bool) -> FieldDescriptor {
        self.nullable = nullable;
        self
    }

    pub const fn access(mut self, access: Access) -> FieldDescriptor {
        self.access = access;
        self
    }

    pub const fn tag(mut self, tag: Tag) -> FieldDescriptor {
        self.tags = self.tags.with(tag);
        self
    }

    /// Tags the field as [`Tag::Duplication`] within `group`.
    pub const fn duplication(mut self, group: u32) -> FieldDescriptor {
        self.tags = self.tags.with(Tag::Duplication);
        self.duplication_group = Some(group);
        self
    }

    /// The column the field maps to: the override if present, else the
    /// field name.
    pub fn column_name(&self) -> &'static str {
        self.column.unwrap_or(self.name)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_identity(&self) -> bool {
        self.has_tag(Tag::Identity)
    }

    /// True when the field is both read and written by generated statements.
    pub fn is_mapped(&self) -> bool {
        self.access == Access::ReadWrite
    }
}
