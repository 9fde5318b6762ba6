/// SQL dialect differences the generator has to account for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `TOP(n)` row caps and `SCOPE_IDENTITY()`.
    #[default]
    SqlServer,

    /// No row caps; identities come back through `RETURNING`.
    Sqlite,
}

impl Flavor {
    /// Whether `UPDATE`/`DELETE` accept a `TOP(n)` row cap.
    pub fn supports_top(self) -> bool {
        matches!(self, Flavor::SqlServer)
    }

    /// Text appended to an `INSERT` so that executing it as a scalar yields
    /// the generated identity.
    pub fn identity_fetch(self) -> &'static str {
        match self {
            Flavor::SqlServer => ";SELECT SCOPE_IDENTITY()",
            Flavor::Sqlite => " RETURNING rowid",
        }
    }
}
