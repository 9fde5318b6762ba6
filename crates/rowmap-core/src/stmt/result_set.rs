use super::Value;
use crate::{Error, ModelObject, Result};

/// A materialized tabular result returned by a reader operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// A borrowed view of one row of a [`ResultSet`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    cells: &'a [Value],
}

impl ResultSet {
    pub fn new<I, S>(columns: I) -> ResultSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResultSet {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    /// Appends a row. The row must have one cell per column.
    pub fn push(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::invalid_result(format!(
                "row has {} cells but the result has {} columns",
                row.len(),
                self.columns.len()
            )));
        }

        self.rows.push(row);
        Ok(())
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_row(mut self, row: Vec<Value>) -> Result<ResultSet> {
        self.push(row)?;
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }
}

impl<'a> Row<'a> {
    /// Returns the cell for `column`, compared case-insensitively.
    ///
    /// A column the result does not carry means the entity declaration has
    /// drifted from the query that produced the rows.
    pub fn get(&self, column: &str) -> Result<&'a Value> {
        self.columns
            .iter()
            .position(|name| name.eq_ignore_ascii_case(column))
            .map(|index| &self.cells[index])
            .ok_or_else(|| Error::invalid_model(ModelObject::Column, column))
    }

    pub fn get_index(&self, index: usize) -> Option<&'a Value> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &'a [Value] {
        self.cells
    }
}
