use pretty_assertions::assert_eq;
use rowmap::{driver::Response, stmt::Value, Predicate};
use tests::{models::Car, Setup};

#[tokio::test]
async fn query_with_predicate() {
    let s = Setup::new();
    s.driver.respond_rows(
        ["Id", "Name", "Year", "Owner", "Fuel", "Created"],
        vec![
            [
                Value::I64(1),
                Value::from("Mini"),
                Value::I64(2001),
                Value::from("Ann"),
                Value::I64(1),
                Value::Null,
            ],
            [
                Value::I64(2),
                Value::from("Golf"),
                Value::I64(2004),
                Value::Null,
                Value::I64(2),
                Value::Null,
            ],
        ],
    );

    let filter = Predicate::new("Year>{0} AND Name<>'{1}'")
        .arg(2000)
        .arg("O'Brien");
    let cars: Vec<Car> = s.db.query(&filter).await.unwrap();

    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].owner.as_deref(), Some("Ann"));
    assert_eq!(cars[1].name, "Golf");
    assert_eq!(
        s.log().statements(),
        ["SELECT Id,Name,Year,Owner,Fuel,Created FROM Cars WHERE Year>2000 AND Name<>'O''Brien'"]
    );

    let event = s.listener.last().unwrap();
    assert_eq!(event.name, "select_succeeded");
    assert_eq!(event.rows, 2);
}

#[tokio::test]
async fn query_all_without_where() {
    let s = Setup::new();

    let cars: Vec<Car> = s.db.query(&Predicate::all()).await.unwrap();

    assert!(cars.is_empty());
    assert_eq!(
        s.log().statements(),
        ["SELECT Id,Name,Year,Owner,Fuel,Created FROM Cars"]
    );
    assert_eq!(s.listener.names(), ["select_failed"]);
}

#[tokio::test]
async fn query_displayable_projects_display_fields() {
    let s = Setup::new();
    s.driver
        .respond_rows(["Name"], vec![[Value::from("Mini")], [Value::from("Golf")]]);

    let cars: Vec<Car> = s.db.query_displayable(&Predicate::all()).await.unwrap();

    assert_eq!(s.log().statements(), ["SELECT Name FROM Cars"]);
    assert_eq!(cars[0].name, "Mini");
    assert_eq!(cars[0].year, 0);
    assert_eq!(cars[1].name, "Golf");
}

#[tokio::test]
async fn query_table_returns_raw_rows() {
    let s = Setup::new();
    s.driver.respond_rows(["Id", "Name"], vec![[Value::I64(1), Value::from("Mini")]]);

    let rows = s
        .db
        .query_table::<Car>(&"Owner IS NULL".into())
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows.row(0).unwrap().get("name").unwrap(), &Value::from("Mini"));
    assert_eq!(
        s.log().statements(),
        ["SELECT Id,Name,Year,Owner,Fuel,Created FROM Cars WHERE Owner IS NULL"]
    );
}

#[tokio::test]
async fn count_rows() {
    let s = Setup::new();
    s.driver.respond(Response::value(Value::I32(3)));

    let count = s
        .db
        .count::<Car>(&Predicate::new("Year>{0}").arg(2000))
        .await
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(
        s.log().statements(),
        ["SELECT COUNT(*) FROM Cars WHERE Year>2000"]
    );
}

#[test]
fn malformed_predicate_is_rejected() {
    let s = Setup::new();

    let err = s
        .db
        .query_blocking::<Car>(&Predicate::new("Year>{1}").arg(2000))
        .unwrap_err();

    assert!(err.to_string().contains("argument 1"));
    assert!(s.log().is_empty());
}
