use crate::{
    schema,
    stmt::{Key, Value},
    Result,
};

use rowmap_core::schema::FieldDescriptor;

/// A type mapped onto one table.
///
/// Usually implemented with `#[derive(rowmap::Entity)]`. Field indices used
/// by [`value`](Entity::value) and [`set_value`](Entity::set_value) are
/// positions in [`fields`](Entity::fields).
pub trait Entity: Default + Send + 'static {
    /// The table the entity maps onto.
    const TABLE: &'static str;

    /// Field metadata, in declaration order.
    fn fields() -> &'static [FieldDescriptor];

    /// Indices of the fields that make up the primary key.
    fn key_fields() -> &'static [usize];

    /// Reads the current value of a field.
    fn value(&self, field: usize) -> Value;

    /// Assigns a field, converting `value` to the field's declared type.
    fn set_value(&mut self, field: usize, value: Value) -> Result<()>;

    /// The entity's primary key. Fails if a component is null.
    fn key(&self) -> Result<Key> {
        schema::resolve_key(self)
    }

    /// Connection string the entity is stored behind, overriding the
    /// database default.
    fn data_source() -> Option<&'static str> {
        None
    }
}
