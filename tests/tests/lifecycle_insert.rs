use pretty_assertions::assert_eq;
use rowmap::{
    driver::{Flavor, Response},
    stmt::Value,
    Error,
};
use tests::{
    models::{Car, Fuel, Registration, Tag},
    Setup,
};

fn mini() -> Car {
    Car {
        name: "Mini".to_string(),
        year: 2001,
        ..Car::default()
    }
}

#[tokio::test]
async fn insert_populates_identity() {
    let s = Setup::new();
    s.driver.respond(Response::value(Value::Decimal(42.into())));

    let mut car = mini();
    assert!(s.db.insert(&mut car).await.unwrap());

    assert_eq!(car.id, 42);
    assert_eq!(
        s.log().statements(),
        ["INSERT INTO Cars (Name,Year,Owner,Fuel,Created) VALUES ('Mini',2001,NULL,1,NULL);SELECT SCOPE_IDENTITY()"]
    );
    assert_eq!(s.listener.names(), ["before_insert", "insert_succeeded"]);

    let events = s.listener.events();
    assert_eq!(events[0].rows, 0);
    assert_eq!(events[1].rows, 1);
}

#[tokio::test]
async fn insert_sqlite_flavor_uses_returning() {
    let s = Setup::with_flavor(Flavor::Sqlite);
    s.driver.respond(Response::value(Value::I64(3)));

    let mut car = Car {
        fuel: Fuel::Electric,
        owner: Some("O'Neil".to_string()),
        ..mini()
    };
    assert!(s.db.insert(&mut car).await.unwrap());

    assert_eq!(car.id, 3);
    assert_eq!(
        s.log().statements(),
        ["INSERT INTO Cars (Name,Year,Owner,Fuel,Created) VALUES ('Mini',2001,'O''Neil',3,NULL) RETURNING rowid"]
    );
}

#[tokio::test]
async fn insert_null_identity_is_failure() {
    let s = Setup::new();

    let mut car = mini();
    assert!(!s.db.insert(&mut car).await.unwrap());

    assert_eq!(car.id, 0);
    assert_eq!(s.listener.names(), ["before_insert", "insert_failed"]);
}

#[tokio::test]
async fn insert_without_identity_counts_rows() {
    let s = Setup::new();
    s.driver.respond(Response::count(1));

    let mut registration = Registration {
        region: "EU".to_string(),
        plate: "AB-1".to_string(),
        car_id: 7,
        vin: "V1".to_string(),
        checksum: Some("ignored".to_string()),
        notes: None,
    };

    assert!(s.db.insert(&mut registration).await.unwrap());
    assert_eq!(
        s.log().statements(),
        ["INSERT INTO Registrations (region,plate,car_id,vin,notes) VALUES ('EU','AB-1',7,'V1',NULL)"]
    );
}

#[test]
fn insert_blocking() {
    let s = Setup::new();
    s.driver.respond(Response::value(Value::I64(8)));

    let mut car = mini();
    assert!(s.db.insert_blocking(&mut car).unwrap());
    assert_eq!(car.id, 8);
    assert_eq!(s.listener.names(), ["before_insert", "insert_succeeded"]);
}

#[tokio::test]
async fn driver_error_propagates_without_failure_event() {
    let s = Setup::new();
    s.driver.fail(Error::invalid_result("boom"));

    let mut car = mini();
    let err = s.db.insert(&mut car).await.unwrap_err();

    assert!(err.is_invalid_result());
    assert_eq!(s.listener.names(), ["before_insert"]);
}

#[tokio::test]
async fn unconvertible_identity_is_an_error_after_the_write() {
    let s = Setup::new();
    s.driver.respond(Response::value(Value::from("not-a-number")));

    let mut car = mini();
    let err = s.db.insert(&mut car).await.unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(car.id, 0);
    assert_eq!(s.log().len(), 1);
    assert_eq!(s.listener.names(), ["before_insert"]);
}

#[tokio::test]
async fn update_with_only_key_fields_writes_nothing() {
    let s = Setup::new();

    let tag = Tag {
        name: "classic".to_string(),
    };

    assert!(!s.db.update(&tag).await.unwrap());
    assert!(s.log().is_empty());

    let event = s.listener.last().unwrap();
    assert_eq!(event.name, "update_failed");
    assert_eq!(event.sql, "");
    assert_eq!(event.rows, 0);
}
