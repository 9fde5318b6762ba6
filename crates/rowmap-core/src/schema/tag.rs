use std::fmt;

/// A policy tag attached to a field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Value is generated by the database on insert.
    Identity = 0,

    /// Never written by INSERT.
    InsertIgnore = 1,

    /// Never written by UPDATE.
    UpdateIgnore = 2,

    /// Never written by INSERT nor UPDATE.
    DmlIgnore = 3,

    /// Never read by SELECT.
    SelectIgnore = 4,

    /// Part of the display projection.
    Displayable = 5,

    /// Participates in a duplication group.
    Duplication = 6,
}

impl Tag {
    const ALL: [Tag; 7] = [
        Tag::Identity,
        Tag::InsertIgnore,
        Tag::UpdateIgnore,
        Tag::DmlIgnore,
        Tag::SelectIgnore,
        Tag::Displayable,
        Tag::Duplication,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A small set of [`Tag`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u8);

impl TagSet {
    pub const EMPTY: TagSet = TagSet(0);

    pub const fn of(tags: &[Tag]) -> TagSet {
        let mut bits = 0;
        let mut i = 0;

        while i < tags.len() {
            bits |= tags[i].bit();
            i += 1;
        }

        TagSet(bits)
    }

    pub const fn with(self, tag: Tag) -> TagSet {
        TagSet(self.0 | tag.bit())
    }

    pub const fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// True if the two sets share at least one tag.
    pub const fn intersects(self, other: TagSet) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl From<Tag> for TagSet {
    fn from(tag: Tag) -> TagSet {
        TagSet(tag.bit())
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> TagSet {
        iter.into_iter().fold(TagSet::EMPTY, TagSet::with)
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
