use pretty_assertions::assert_eq;
use rowmap::{
    schema::{self, Access, Policy, Tag},
    stmt::{Primitive, Type, Value, ValueEnum},
    Entity,
};
use tests::models::{AuditEntry, Car, Fuel, Registration};

#[test]
fn table_and_fields() {
    assert_eq!(Car::TABLE, "Cars");

    let names: Vec<_> = Car::fields().iter().map(|field| field.name).collect();
    assert_eq!(names, ["id", "name", "year", "owner", "fuel", "created"]);

    let id = &Car::fields()[0];
    assert_eq!(id.column_name(), "Id");
    assert_eq!(id.ty, Type::I64);
    assert!(id.is_identity());
    assert!(!id.nullable);

    let owner = &Car::fields()[3];
    assert_eq!(owner.ty, Type::String);
    assert!(owner.nullable);

    assert_eq!(Car::fields()[4].ty, Type::Enum);
    assert_eq!(Car::fields()[5].ty, Type::DateTime);
    assert!(Car::fields()[5].has_tag(Tag::UpdateIgnore));
}

#[test]
fn key_fields() {
    assert_eq!(Car::key_fields(), [0]);
    assert_eq!(Registration::key_fields(), [0, 1]);

    let registration = Registration {
        region: "EU".to_string(),
        plate: "AB-1".to_string(),
        ..Registration::default()
    };
    let key = registration.key().unwrap();

    assert_eq!(key.columns().collect::<Vec<_>>(), ["region", "plate"]);
    assert_eq!(key.get("PLATE"), Some(&Value::from("AB-1")));
}

#[test]
fn duplication_groups() {
    assert_eq!(schema::duplication_groups::<Car>(), [vec![1, 2]]);
    assert_eq!(schema::duplication_groups::<Registration>(), [vec![3]]);
    assert_eq!(Registration::fields()[3].duplication_group, Some(1));
    assert!(schema::duplication_groups::<AuditEntry>().is_empty());
}

#[test]
fn column_access_and_data_source() {
    let message = &AuditEntry::fields()[1];
    assert_eq!(message.column_name(), "Message");
    assert_eq!(message.access, Access::ReadOnly);
    assert!(!message.is_mapped());

    assert_eq!(AuditEntry::data_source(), Some("mock://audit"));
    assert_eq!(Car::data_source(), None);
    assert_eq!(schema::columns::<AuditEntry>(Policy::SELECT), ["id", "detail"]);
}

#[test]
fn policies() {
    assert_eq!(
        schema::columns::<Registration>(Policy::SELECT),
        ["region", "plate", "car_id", "vin", "checksum"]
    );
    assert_eq!(
        schema::columns::<Registration>(Policy::INSERT),
        ["region", "plate", "car_id", "vin", "notes"]
    );
    assert_eq!(
        schema::columns::<Car>(Policy::UPDATE),
        ["Name", "Year", "Owner", "Fuel"]
    );
    assert_eq!(schema::columns::<Car>(Policy::DISPLAY), ["Name"]);
}

#[test]
fn value_and_set_value() {
    let mut car = Car::default();

    car.set_value(1, Value::from("Mini")).unwrap();
    car.set_value(2, Value::from("2001")).unwrap();
    car.set_value(3, Value::Null).unwrap();

    assert_eq!(car.value(1), Value::from("Mini"));
    assert_eq!(car.value(2), Value::I32(2001));
    assert_eq!(car.value(3), Value::Null);
    assert_eq!(car.year, 2001);

    let err = car.set_value(2, Value::from("soon")).unwrap_err();
    assert!(err.is_type_conversion());

    assert!(car.set_value(42, Value::Null).is_err());
}

#[test]
fn enum_primitive() {
    assert_eq!(
        Fuel::Diesel.to_value(),
        Value::Enum(ValueEnum {
            discriminant: 2,
            name: "Diesel",
        })
    );

    assert_eq!(Fuel::load(Value::I64(3)).unwrap(), Fuel::Electric);
    assert_eq!(Fuel::load(Value::from("Petrol")).unwrap(), Fuel::Petrol);
    assert_eq!(Fuel::load(Value::from(" 2 ")).unwrap(), Fuel::Diesel);
    assert_eq!(Fuel::load(Fuel::Diesel.to_value()).unwrap(), Fuel::Diesel);

    assert!(Fuel::load(Value::I64(9)).unwrap_err().is_type_conversion());
    assert!(Fuel::load(Value::from("petrol")).is_err());
    assert_eq!(<Option<Fuel>>::load(Value::Null).unwrap(), None);
}
