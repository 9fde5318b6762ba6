use super::{Formatter, ToSql};

/// Comma delimited, without padding
pub(super) struct Comma<L>(pub(super) L);

/// Joined with ` AND `
pub(super) struct And<L>(pub(super) L);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ",";
        }
    }
}

impl<L> ToSql for And<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = " AND ";
        }
    }
}
