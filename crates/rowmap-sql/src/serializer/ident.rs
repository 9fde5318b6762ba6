use super::{Formatter, ToSql};

/// A table or column name, emitted verbatim.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self.0.as_ref());
    }
}
