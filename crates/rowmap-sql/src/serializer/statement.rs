use super::{Formatter, Ident, Literal, ToSql};

use rowmap_core::stmt::Value;

/// Row cap for `UPDATE` and `DELETE`; renders nothing for zero or when the
/// flavor has no `TOP`.
pub(super) struct Top(pub(super) u32);

/// `column<op>literal`
pub(super) struct Compare<'a> {
    column: &'a str,
    op: &'static str,
    value: &'a Value,
}

impl ToSql for Top {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0 != 0 && f.generator.flavor.supports_top() {
            let top = format!("TOP({}) ", self.0);
            fmt!(f, top.as_str());
        }
    }
}

impl<'a> Compare<'a> {
    pub(super) fn new(column: &'a str, op: &'static str, value: &'a Value) -> Compare<'a> {
        Compare { column, op, value }
    }
}

impl ToSql for Compare<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.column) self.op Literal(self.value));
    }
}
