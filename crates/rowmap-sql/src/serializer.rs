#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{And, Comma};

mod flavor;

mod ident;
use ident::Ident;

mod literal;
pub use literal::{literal, Literal};

mod source;
pub use source::{FieldValues, Parallel};

// Fragment serializers
mod statement;
use statement::{Compare, Top};

use rowmap_core::{driver::Flavor, stmt::Value, Error, Result};

/// Generates SQL statement text from table names and field/value sources.
///
/// Values are rendered inline as literals; no statement is parameterized.
/// Column and table names are emitted verbatim and must come from entity
/// metadata, never from user input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generator {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the generator
    generator: &'a Generator,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Generator {
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// `SELECT f1,f2 FROM table`, or empty text when `fields` is empty.
    pub fn select<S: AsRef<str>>(&self, table: &str, fields: &[S]) -> Result<String> {
        check_table(table)?;

        if fields.is_empty() {
            return Ok(String::new());
        }

        let fields = Comma(fields.iter().map(|field| Ident(field.as_ref())));
        Ok(self.render(|f| fmt!(f, "SELECT " fields " FROM " Ident(table))))
    }

    /// `INSERT INTO table (f1,f2) VALUES (v1,v2)`, in source order.
    pub fn insert(&self, table: &str, src: &(impl FieldValues + ?Sized)) -> Result<String> {
        check_table(table)?;
        let pairs = literal_pairs(src)?;

        if pairs.is_empty() {
            return Ok(String::new());
        }

        let columns = Comma(pairs.iter().map(|&(column, _)| Ident(column)));
        let values = Comma(pairs.iter().map(|&(_, value)| Literal(value)));

        Ok(self.render(|f| {
            fmt!(f, "INSERT INTO " Ident(table) " (" columns ") VALUES (" values ")")
        }))
    }

    /// `UPDATE [TOP(top) ]table SET f1=v1,f2=v2`.
    ///
    /// The row cap is only emitted when `top` is non-zero and the flavor
    /// supports it. The caller appends the predicate.
    pub fn update(
        &self,
        table: &str,
        src: &(impl FieldValues + ?Sized),
        top: u32,
    ) -> Result<String> {
        check_table(table)?;
        let pairs = literal_pairs(src)?;

        if pairs.is_empty() {
            return Ok(String::new());
        }

        let assignments = Comma(
            pairs
                .iter()
                .map(|&(column, value)| Compare::new(column, "=", value)),
        );

        Ok(self.render(|f| fmt!(f, "UPDATE " Top(top) Ident(table) " SET " assignments)))
    }

    /// `DELETE [TOP(top) ]FROM table WHERE f1=v1 AND f2=v2`.
    pub fn delete(
        &self,
        table: &str,
        src: &(impl FieldValues + ?Sized),
        top: u32,
    ) -> Result<String> {
        check_table(table)?;
        let pairs = literal_pairs(src)?;

        if pairs.is_empty() {
            return Ok(String::new());
        }

        let filter = And(
            pairs
                .iter()
                .map(|&(column, value)| Compare::new(column, "=", value)),
        );

        Ok(self.render(|f| fmt!(f, "DELETE " Top(top) "FROM " Ident(table) " WHERE " filter)))
    }

    /// `[WHERE ]f1=v1 AND f2=v2`.
    ///
    /// Null renders as `col=NULL`, which matches no row under three-valued
    /// logic.
    pub fn where_clause(
        &self,
        src: &(impl FieldValues + ?Sized),
        include_where: bool,
    ) -> Result<String> {
        self.filter(src, include_where, "=")
    }

    /// Same as [`where_clause`](Self::where_clause), comparing with `!=`.
    pub fn where_differed(
        &self,
        src: &(impl FieldValues + ?Sized),
        include_where: bool,
    ) -> Result<String> {
        self.filter(src, include_where, "!=")
    }

    /// `f1,f2,f3`
    pub fn fields_enumeration<S: AsRef<str>>(&self, fields: &[S]) -> String {
        self.render(|f| fmt!(f, Comma(fields.iter().map(|field| Ident(field.as_ref())))))
    }

    /// `v1,v2,v3`, each rendered as a literal.
    ///
    /// Values must be representable; see [`Literal`].
    pub fn values_enumeration(&self, values: &[Value]) -> String {
        self.render(|f| fmt!(f, Comma(values.iter().map(Literal))))
    }

    /// `f1=v1,f2=v2`
    pub fn set_pairs(&self, src: &(impl FieldValues + ?Sized)) -> Result<String> {
        let pairs = literal_pairs(src)?;
        let assignments = Comma(
            pairs
                .iter()
                .map(|&(column, value)| Compare::new(column, "=", value)),
        );
        Ok(self.render(|f| fmt!(f, assignments)))
    }

    /// `SELECT COUNT(*) FROM table[ WHERE predicate]`.
    pub fn count(&self, table: &str, predicate: &str) -> Result<String> {
        check_table(table)?;

        Ok(self.render(|f| {
            fmt!(f, "SELECT COUNT(*) FROM " Ident(table));

            if !predicate.is_empty() {
                fmt!(f, " WHERE " predicate);
            }
        }))
    }

    fn filter(
        &self,
        src: &(impl FieldValues + ?Sized),
        include_where: bool,
        op: &'static str,
    ) -> Result<String> {
        let pairs = literal_pairs(src)?;

        if pairs.is_empty() {
            return Ok(String::new());
        }

        let filter = And(
            pairs
                .iter()
                .map(|&(column, value)| Compare::new(column, op, value)),
        );

        Ok(self.render(|f| {
            if include_where {
                fmt!(f, "WHERE ");
            }

            fmt!(f, filter);
        }))
    }

    fn render(&self, write: impl FnOnce(&mut Formatter<'_>)) -> String {
        let mut ret = String::new();

        let mut f = Formatter {
            generator: self,
            dst: &mut ret,
        };

        write(&mut f);
        ret
    }
}

/// Collects the pairs of `src`, rejecting values that have no SQL literal.
fn literal_pairs(src: &(impl FieldValues + ?Sized)) -> Result<Vec<(&str, &Value)>> {
    let pairs = src.pairs()?;

    for &(_, value) in &pairs {
        if !Literal(value).is_representable() {
            return Err(Error::type_conversion(value.clone(), "SQL literal"));
        }
    }

    Ok(pairs)
}

fn check_table(table: &str) -> Result<()> {
    if table.trim().is_empty() {
        return Err(Error::invalid_table());
    }

    Ok(())
}
