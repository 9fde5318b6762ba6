use pretty_assertions::assert_eq;
use rowmap::{
    driver::Response,
    stmt::{Key, Value},
    Predicate,
};
use tests::{
    models::{Car, Fuel},
    Scope, Setup, URL,
};

const CAR_COLUMNS: [&str; 6] = ["Id", "Name", "Year", "Owner", "Fuel", "Created"];

fn mini_row() -> [Value; 6] {
    [
        Value::I64(5),
        Value::from("Mini"),
        Value::I64(2001),
        Value::Null,
        Value::I64(2),
        Value::from("2024-03-01 12:00:00"),
    ]
}

#[tokio::test]
async fn get_loads_row() {
    let s = Setup::new();
    s.driver.respond_rows(CAR_COLUMNS, vec![mini_row()]);

    let car: Car = s
        .db
        .get(&Key::single("Id", 5i64).unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(car.id, 5);
    assert_eq!(car.name, "Mini");
    assert_eq!(car.year, 2001);
    assert_eq!(car.owner, None);
    assert_eq!(car.fuel, Fuel::Diesel);
    assert_eq!(
        car.created.unwrap().to_string(),
        "2024-03-01 12:00:00".to_string()
    );

    assert_eq!(
        s.log().statements(),
        ["SELECT Id,Name,Year,Owner,Fuel,Created FROM Cars WHERE Id=5"]
    );

    let event = s.listener.last().unwrap();
    assert_eq!(event.name, "get_succeeded");
    assert_eq!(event.table, "Cars");
    assert_eq!(event.rows, 1);
    assert_eq!(event.scope, Scope::ConnectionString(URL.to_string()));
}

#[tokio::test]
async fn get_missing_row() {
    let s = Setup::new();

    let car: Option<Car> = s.db.get(&Key::single("Id", 999i64).unwrap()).await.unwrap();

    assert_eq!(car, None);

    let event = s.listener.last().unwrap();
    assert_eq!(event.name, "get_failed");
    assert_eq!(event.rows, 0);
    assert_eq!(
        event.sql,
        "SELECT Id,Name,Year,Owner,Fuel,Created FROM Cars WHERE Id=999"
    );
}

#[tokio::test]
async fn get_by_uses_model_key() {
    let s = Setup::new();
    s.driver.respond_rows(CAR_COLUMNS, vec![mini_row()]);

    let probe = Car {
        id: 5,
        ..Car::default()
    };

    let car = s.db.get_by(&probe).await.unwrap().unwrap();
    assert_eq!(car.name, "Mini");
    assert_eq!(
        s.log().statements(),
        ["SELECT Id,Name,Year,Owner,Fuel,Created FROM Cars WHERE Id=5"]
    );
}

#[test]
fn get_blocking_matches_async() {
    let s = Setup::new();
    s.driver.respond_rows(CAR_COLUMNS, vec![mini_row()]);

    let car: Car = s
        .db
        .get_blocking(&Key::single("Id", 5i64).unwrap())
        .unwrap()
        .unwrap();

    assert_eq!(car.fuel, Fuel::Diesel);
    assert_eq!(
        s.log().statements(),
        ["SELECT Id,Name,Year,Owner,Fuel,Created FROM Cars WHERE Id=5"]
    );
    assert_eq!(s.listener.names(), ["get_succeeded"]);
}

#[tokio::test]
async fn enum_cell_by_name() {
    let s = Setup::new();
    let mut row = mini_row();
    row[4] = Value::from(" Electric ");
    s.driver.respond_rows(CAR_COLUMNS, vec![row]);

    let car: Car = s
        .db
        .get(&Key::single("Id", 5i64).unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(car.fuel, Fuel::Electric);
}

#[tokio::test]
async fn unknown_enum_value_fails() {
    let s = Setup::new();
    let mut row = mini_row();
    row[4] = Value::from("Steam");
    s.driver.respond_rows(CAR_COLUMNS, vec![row]);

    let err = s
        .db
        .get::<Car>(&Key::single("Id", 5i64).unwrap())
        .await
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert!(err.to_string().contains("failed to load column `Fuel` of `Cars`"));
}

#[tokio::test]
async fn missing_column_is_invalid_model() {
    let s = Setup::new();
    s.driver.respond_rows(
        ["Id", "Name", "Year", "Owner", "Fuel"],
        vec![[
            Value::I64(5),
            Value::from("Mini"),
            Value::I64(2001),
            Value::Null,
            Value::I64(1),
        ]],
    );

    let err = s
        .db
        .get::<Car>(&Key::single("Id", 5i64).unwrap())
        .await
        .unwrap_err();

    assert!(err.is_invalid_model());
    assert_eq!(err.invalid_model_name(), Some("Created"));
}

#[test]
fn null_key_is_rejected() {
    let err = Key::single("Id", Value::Null).unwrap_err();
    assert!(err.is_invalid_key());
}

#[tokio::test]
async fn count_all() {
    let s = Setup::new();
    s.driver.respond(Response::value(Value::I64(4)));

    let count = s.db.count::<Car>(&Predicate::all()).await.unwrap();
    assert_eq!(count, 4);
    assert_eq!(s.log().statements(), ["SELECT COUNT(*) FROM Cars"]);
}
