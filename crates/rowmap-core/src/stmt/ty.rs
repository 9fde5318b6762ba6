/// The declared value type of a mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// Fixed-point decimal
    Decimal,

    /// String type
    String,

    /// UUID
    Uuid,

    /// Date and time without a zone
    DateTime,

    /// Date and time in UTC
    DateTimeUtc,

    /// Calendar date
    Date,

    /// A fieldless enumeration stored as its integer discriminant
    Enum,
}

impl Type {
    pub fn is_enum(self) -> bool {
        matches!(self, Self::Enum)
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::F32
                | Self::F64
                | Self::Decimal
        )
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, Self::DateTime | Self::DateTimeUtc | Self::Date)
    }

    /// Name of the Rust type this maps to, for error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Uuid => "Uuid",
            Self::DateTime => "NaiveDateTime",
            Self::DateTimeUtc => "DateTime<Utc>",
            Self::Date => "NaiveDate",
            Self::Enum => "enum",
        }
    }
}
