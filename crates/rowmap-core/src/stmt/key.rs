use super::Value;
use crate::{bail, Error, Result};

use indexmap::IndexMap;

/// A primary key: an ordered mapping from column name to value.
///
/// Keys are built from the fields an entity declares as its key. No
/// component may be null; construction fails with an invalid key error
/// naming the offending column.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    components: IndexMap<String, Value>,
}

impl Key {
    pub fn new<I, C, V>(components: I) -> Result<Key>
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<String>,
        V: Into<Value>,
    {
        let mut map = IndexMap::new();

        for (column, value) in components {
            let column = column.into();
            let value = value.into();

            if value.is_null() {
                return Err(Error::invalid_key(column));
            }

            if map.insert(column, value).is_some() {
                bail!("duplicate key component");
            }
        }

        if map.is_empty() {
            bail!("a key needs at least one component");
        }

        Ok(Key { components: map })
    }

    /// Builds a single-column key.
    pub fn single(column: impl Into<String>, value: impl Into<Value>) -> Result<Key> {
        Key::new([(column.into(), value.into())])
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the value for `column`. Column names compare case-insensitively.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.components
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.components.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.components
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }
}

impl<'a> IntoIterator for &'a Key {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
