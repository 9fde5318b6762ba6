use super::{FieldDescriptor, Tag, TagSet};

/// Selects the subset of an entity's fields an operation works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Keep fields carrying at least one of the tags.
    IncludeOnly(TagSet),

    /// Keep fields carrying none of the tags.
    ExcludeAll(TagSet),
}

impl Policy {
    /// Fields read by SELECT.
    pub const SELECT: Policy = Policy::ExcludeAll(TagSet::of(&[Tag::SelectIgnore]));

    /// Fields written by INSERT.
    pub const INSERT: Policy = Policy::ExcludeAll(TagSet::of(&[
        Tag::InsertIgnore,
        Tag::DmlIgnore,
        Tag::Identity,
    ]));

    /// Fields written by UPDATE, before key columns are removed.
    pub const UPDATE: Policy = Policy::ExcludeAll(TagSet::of(&[
        Tag::UpdateIgnore,
        Tag::DmlIgnore,
        Tag::Identity,
    ]));

    /// The display projection.
    pub const DISPLAY: Policy = Policy::IncludeOnly(TagSet::of(&[Tag::Displayable]));

    /// Fields compared by the duplicate check.
    pub const DUPLICATION: Policy = Policy::IncludeOnly(TagSet::of(&[Tag::Duplication]));

    pub fn include_only(tags: impl Into<TagSet>) -> Policy {
        Policy::IncludeOnly(tags.into())
    }

    pub fn exclude_all(tags: impl Into<TagSet>) -> Policy {
        Policy::ExcludeAll(tags.into())
    }

    /// Whether `field` is kept under this policy.
    ///
    /// Only read-write fields are ever kept.
    pub fn admits(&self, field: &FieldDescriptor) -> bool {
        if !field.is_mapped() {
            return false;
        }

        match *self {
            Policy::IncludeOnly(tags) => field.tags.intersects(tags),
            Policy::ExcludeAll(tags) => !field.tags.intersects(tags),
        }
    }

    /// The complementary policy over the same tags.
    pub fn complement(&self) -> Policy {
        match *self {
            Policy::IncludeOnly(tags) => Policy::ExcludeAll(tags),
            Policy::ExcludeAll(tags) => Policy::IncludeOnly(tags),
        }
    }
}
