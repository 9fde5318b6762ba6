//! Entities shared by the integration tests.

use chrono::NaiveDateTime;

#[derive(Debug, Default, Clone, PartialEq, rowmap::Entity)]
#[table = "Cars"]
pub struct Car {
    #[key]
    #[identity]
    #[column("Id")]
    pub id: i64,

    #[column("Name")]
    #[duplication]
    #[displayable]
    pub name: String,

    #[column("Year")]
    #[duplication]
    pub year: i32,

    #[column("Owner")]
    pub owner: Option<String>,

    #[column("Fuel")]
    pub fuel: Fuel,

    #[column("Created")]
    #[update_ignore]
    pub created: Option<NaiveDateTime>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, rowmap::Enum)]
pub enum Fuel {
    #[default]
    Petrol = 1,
    Diesel = 2,
    Electric = 3,
}

/// Composite key, no identity.
#[derive(Debug, Default, Clone, PartialEq, rowmap::Entity)]
#[table = "Registrations"]
#[key(region, plate)]
pub struct Registration {
    pub region: String,
    pub plate: String,
    pub car_id: i64,

    #[duplication(1)]
    pub vin: String,

    #[dml_ignore]
    pub checksum: Option<String>,

    #[select_ignore]
    pub notes: Option<String>,
}

/// Stored behind its own connection string.
#[derive(Debug, Default, Clone, PartialEq, rowmap::Entity)]
#[table = "AuditEntries"]
#[data_source = "mock://audit"]
pub struct AuditEntry {
    #[key]
    pub id: i32,

    #[column(name = "Message", read_only)]
    pub message: String,

    pub detail: Option<String>,
}

/// Every field is part of the key, so there is nothing to update.
#[derive(Debug, Default, Clone, PartialEq, rowmap::Entity)]
#[table = "Tags"]
pub struct Tag {
    #[key]
    pub name: String,
}
