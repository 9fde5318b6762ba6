use pretty_assertions::assert_eq;
use rowmap::{driver::Response, stmt::Value};
use tests::{
    models::{AuditEntry, Car, Registration},
    Setup,
};

#[derive(Debug, Default, Clone, PartialEq, rowmap::Entity)]
#[table = "W"]
struct Widget {
    #[key]
    id: i32,

    #[duplication]
    a: String,

    #[duplication]
    b: i32,

    #[duplication(2)]
    c: String,
}

#[tokio::test]
async fn duplicate_found() {
    let s = Setup::new();
    s.driver.respond(Response::value(Value::I32(1)));

    let car = Car {
        name: "Mini".to_string(),
        year: 2001,
        ..Car::default()
    };

    assert!(s.db.is_duplicated(&car).await.unwrap());
    assert_eq!(
        s.log().statements(),
        ["SELECT COUNT(*) FROM Cars WHERE (Name='Mini' AND Year=2001)"]
    );
    assert!(s.listener.events().is_empty());
}

#[test]
fn no_duplicate() {
    let s = Setup::new();
    s.driver.respond(Response::value(Value::I32(0)));

    let registration = Registration {
        vin: "V1".to_string(),
        ..Registration::default()
    };

    assert!(!s.db.is_duplicated_blocking(&registration).unwrap());
    assert_eq!(
        s.log().statements(),
        ["SELECT COUNT(*) FROM Registrations WHERE (vin='V1')"]
    );
}

#[tokio::test]
async fn entity_without_groups_is_never_duplicated() {
    let s = Setup::new();

    assert!(!s.db.is_duplicated(&AuditEntry::default()).await.unwrap());
    assert!(s.log().is_empty());
}

#[tokio::test]
async fn every_group_must_match() {
    let s = Setup::new();
    s.driver.respond(Response::value(Value::I64(0)));

    let widget = Widget {
        id: 1,
        a: "x".to_string(),
        b: 2,
        c: "y".to_string(),
    };

    assert!(!s.db.is_duplicated(&widget).await.unwrap());
    assert_eq!(
        s.log().statements(),
        ["SELECT COUNT(*) FROM W WHERE (a='x' AND b=2) AND (c='y')"]
    );
}
