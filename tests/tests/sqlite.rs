#![cfg(feature = "sqlite")]

use pretty_assertions::assert_eq;
use rowmap::{
    driver::{Operation, Sqlite},
    stmt::{Key, Value},
    Db, Predicate,
};
use tests::{
    models::{Car, Fuel},
    init_tracing, RecordingListener,
};

const SCHEMA: &str = "CREATE TABLE Cars (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL,
    Year INTEGER NOT NULL,
    Owner TEXT,
    Fuel INTEGER NOT NULL,
    Created TEXT
)";

struct Fixture {
    db: Db,
    listener: RecordingListener,
    _dir: tempfile::TempDir,
}

fn setup() -> Fixture {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("cars.db").display());
    let listener = RecordingListener::default();

    let db = Db::builder()
        .driver(Sqlite)
        .connection_string(url)
        .listener(listener.clone())
        .build()
        .unwrap();

    let mut connection = db.connect_blocking().unwrap();
    connection
        .exec_blocking(Operation::NonQuery(SCHEMA.to_string()))
        .unwrap();

    Fixture {
        db,
        listener,
        _dir: dir,
    }
}

fn car(name: &str, year: i32) -> Car {
    Car {
        name: name.to_string(),
        year,
        ..Car::default()
    }
}

#[tokio::test]
async fn crud_round_trip() {
    let f = setup();

    let mut mini = car("Mini", 2001);
    mini.fuel = Fuel::Electric;
    mini.created = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 30, 0);

    assert!(f.db.insert(&mut mini).await.unwrap());
    assert_eq!(mini.id, 1);

    let loaded: Car = f.db.get_by(&mini).await.unwrap().unwrap();
    assert_eq!(loaded, mini);

    mini.owner = Some("O'Neil".to_string());
    assert!(f.db.update(&mini).await.unwrap());

    let loaded: Car = f
        .db
        .get(&Key::single("Id", mini.id).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.owner.as_deref(), Some("O'Neil"));

    assert!(f.db.delete(&mini).await.unwrap());
    assert_eq!(f.db.get_by(&mini).await.unwrap(), None);
    assert!(!f.db.delete(&mini).await.unwrap());

    assert_eq!(f.listener.names().last(), Some(&"delete_failed"));
}

#[test]
fn duplicate_check() {
    let f = setup();

    let mut ford = car("Ford", 2020);
    assert!(f.db.insert_blocking(&mut ford).unwrap());

    assert!(f.db.is_duplicated_blocking(&car("Ford", 2020)).unwrap());
    assert!(!f.db.is_duplicated_blocking(&car("Ford", 2021)).unwrap());
    assert!(!f.db.is_duplicated_blocking(&car("Golf", 2020)).unwrap());
}

#[tokio::test]
async fn get_on_empty_table() {
    let f = setup();

    let car: Option<Car> = f.db.get(&Key::single("Id", 999i64).unwrap()).await.unwrap();
    assert_eq!(car, None);

    let event = f.listener.last().unwrap();
    assert_eq!(event.name, "get_failed");
    assert_eq!(event.rows, 0);
}

#[test]
fn query_and_count() {
    let f = setup();

    for (name, year) in [("Mini", 2001), ("Golf", 2004), ("Polo", 2010)] {
        f.db.insert_blocking(&mut car(name, year)).unwrap();
    }

    let recent: Vec<Car> = f
        .db
        .query_blocking(&Predicate::new("Year>{0} ORDER BY Year").arg(2002))
        .unwrap();
    let names: Vec<_> = recent.iter().map(|car| car.name.as_str()).collect();
    assert_eq!(names, ["Golf", "Polo"]);

    assert_eq!(f.db.count_blocking::<Car>(&Predicate::all()).unwrap(), 3);

    // `=NULL` never matches in SQL, even where the column is null.
    let filter = f
        .db
        .generator()
        .where_clause(&[("Owner", Value::Null)], false)
        .unwrap();
    assert_eq!(filter, "Owner=NULL");

    let owned: Vec<Car> = f.db.query_blocking(&Predicate::new(filter)).unwrap();
    assert!(owned.is_empty());
    assert_eq!(f.listener.names().last(), Some(&"select_failed"));

    let displayed: Vec<Car> = f.db.query_displayable_blocking(&Predicate::all()).unwrap();
    assert_eq!(displayed.len(), 3);
    assert_eq!(displayed[0].year, 0);
}

#[tokio::test]
async fn transaction_rollback() {
    let f = setup();

    let mut transaction = f.db.begin().await.unwrap();
    f.db.with_transaction(&mut transaction)
        .insert(&mut car("Mini", 2001))
        .await
        .unwrap();
    transaction.rollback().await.unwrap();

    assert_eq!(f.db.count::<Car>(&Predicate::all()).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_table() {
    let f = setup();

    #[derive(Debug, Default, rowmap::Entity)]
    #[table = "Trucks"]
    struct Truck {
        #[key]
        id: i64,
    }

    let err = f.db.query::<Truck>(&Predicate::all()).await.unwrap_err();
    assert!(err.is_invalid_model());
    assert_eq!(err.invalid_model_name(), Some("Trucks"));
}
