use rowmap_core::{
    stmt::{Key, Value},
    Error, Result,
};

use indexmap::IndexMap;

/// An ordered collection of column/value pairs fed to the [`Generator`].
///
/// [`Generator`]: super::Generator
pub trait FieldValues {
    /// Returns the pairs in iteration order.
    ///
    /// Sources built from two parallel sequences fail with
    /// [`Error::disparity`] when their lengths differ.
    fn pairs(&self) -> Result<Vec<(&str, &Value)>>;
}

/// Field names and values held in two parallel slices.
#[derive(Debug, Clone, Copy)]
pub struct Parallel<'a, S> {
    pub fields: &'a [S],
    pub values: &'a [Value],
}

impl<'a, S> Parallel<'a, S> {
    pub fn new(fields: &'a [S], values: &'a [Value]) -> Parallel<'a, S> {
        Parallel { fields, values }
    }
}

impl<S: AsRef<str>> FieldValues for Parallel<'_, S> {
    fn pairs(&self) -> Result<Vec<(&str, &Value)>> {
        if self.fields.len() != self.values.len() {
            return Err(Error::disparity(self.fields.len(), self.values.len()));
        }

        Ok(self
            .fields
            .iter()
            .map(AsRef::as_ref)
            .zip(self.values)
            .collect())
    }
}

impl<S: AsRef<str>> FieldValues for [(S, Value)] {
    fn pairs(&self) -> Result<Vec<(&str, &Value)>> {
        Ok(self
            .iter()
            .map(|(column, value)| (column.as_ref(), value))
            .collect())
    }
}

impl<S: AsRef<str>, const N: usize> FieldValues for [(S, Value); N] {
    fn pairs(&self) -> Result<Vec<(&str, &Value)>> {
        self.as_slice().pairs()
    }
}

impl<S: AsRef<str>> FieldValues for Vec<(S, Value)> {
    fn pairs(&self) -> Result<Vec<(&str, &Value)>> {
        self.as_slice().pairs()
    }
}

impl FieldValues for IndexMap<String, Value> {
    fn pairs(&self) -> Result<Vec<(&str, &Value)>> {
        Ok(self
            .iter()
            .map(|(column, value)| (column.as_str(), value))
            .collect())
    }
}

impl FieldValues for Key {
    fn pairs(&self) -> Result<Vec<(&str, &Value)>> {
        Ok(self.iter().collect())
    }
}

impl<T: FieldValues + ?Sized> FieldValues for &T {
    fn pairs(&self) -> Result<Vec<(&str, &Value)>> {
        (**self).pairs()
    }
}
