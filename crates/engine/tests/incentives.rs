use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{BEST_INCENTIVES_LIMIT, Engine, EngineError, ExcellentEmployee};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn insert_employee(db: &DatabaseConnection, id: i32, name: &str) {
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "INSERT INTO employees (id, name) VALUES (?, ?)",
        vec![id.into(), name.into()],
    ))
    .await
    .unwrap();
}

async fn insert_payment(
    db: &DatabaseConnection,
    employee_id: i32,
    payment_date: NaiveDate,
    base_salary: i64,
    incentive: i64,
) {
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "INSERT INTO salary_payments (employee_id, payment_date, base_salary, incentive) \
         VALUES (?, ?, ?, ?)",
        vec![
            employee_id.into(),
            payment_date.into(),
            base_salary.into(),
            incentive.into(),
        ],
    ))
    .await
    .unwrap();
}

/// Four employees paid in June 2024, plus payments just outside the month.
async fn seeded() -> (Engine, DatabaseConnection) {
    let (engine, db) = engine_with_db().await;

    for (id, name) in [(1, "Kim"), (2, "Lee"), (3, "Park"), (4, "Choi"), (5, "Jung")] {
        insert_employee(&db, id, name).await;
    }

    insert_payment(&db, 1, date(2024, 6, 1), 3_000_000, 200_000).await;
    insert_payment(&db, 1, date(2024, 6, 30), 3_000_000, 150_000).await;
    insert_payment(&db, 2, date(2024, 6, 15), 3_200_000, 500_000).await;
    insert_payment(&db, 3, date(2024, 6, 15), 2_800_000, 100_000).await;
    insert_payment(&db, 4, date(2024, 6, 20), 2_900_000, 50_000).await;
    // Outside the window on both sides; large enough to win if counted.
    insert_payment(&db, 4, date(2024, 5, 31), 2_900_000, 9_000_000).await;
    insert_payment(&db, 5, date(2024, 7, 1), 2_500_000, 9_000_000).await;

    (engine, db)
}

#[tokio::test]
async fn salary_payments_lists_whole_ledger_with_names() {
    let (engine, _db) = seeded().await;

    let rows = engine.salary_payments().await.unwrap();

    assert_eq!(rows.len(), 7);
    let choi_may = rows
        .iter()
        .find(|r| r.employee_id == 4 && r.payment_date == date(2024, 5, 31))
        .unwrap();
    assert_eq!(choi_may.employee_name, "Choi");
    assert_eq!(choi_may.base_salary, 2_900_000);
    assert_eq!(choi_may.incentive, 9_000_000);
}

#[tokio::test]
async fn best_incentives_ranks_top_three_within_period() {
    let (engine, _db) = seeded().await;

    let rows = engine
        .best_incentives(date(2024, 6, 1), date(2024, 6, 30))
        .await
        .unwrap();

    assert_eq!(rows.len() as i64, BEST_INCENTIVES_LIMIT);
    let ranking: Vec<(i32, i64)> = rows
        .iter()
        .map(|r| (r.employee_id, r.total_incentive))
        .collect();
    // Kim's two payments sit on both period bounds and are both counted.
    assert_eq!(ranking, vec![(2, 500_000), (1, 350_000), (3, 100_000)]);
    assert_eq!(rows[0].employee_name, "Lee");
}

#[tokio::test]
async fn best_incentives_returns_fewer_rows_when_few_employees_were_paid() {
    let (engine, _db) = seeded().await;

    let rows = engine
        .best_incentives(date(2024, 7, 1), date(2024, 7, 31))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_id, 5);
    assert_eq!(rows[0].total_incentive, 9_000_000);
}

#[tokio::test]
async fn best_incentives_is_empty_for_period_without_payments() {
    let (engine, _db) = seeded().await;

    let rows = engine
        .best_incentives(date(2023, 1, 1), date(2023, 1, 31))
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn best_incentives_is_sorted_descending() {
    let (engine, _db) = seeded().await;

    let rows = engine
        .best_incentives(date(2024, 5, 1), date(2024, 7, 31))
        .await
        .unwrap();

    assert!(rows.len() <= 3);
    assert!(rows.windows(2).all(|pair| pair[0].total_incentive >= pair[1].total_incentive));
}

#[tokio::test]
async fn best_incentives_rejects_reversed_period() {
    let (engine, _db) = seeded().await;

    let err = engine
        .best_incentives(date(2024, 6, 30), date(2024, 6, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidPeriod(_)));
}

#[tokio::test]
async fn excellent_employee_is_top_earner() {
    let (engine, _db) = seeded().await;

    let best = engine
        .excellent_employee(date(2024, 6, 1), date(2024, 6, 30))
        .await
        .unwrap();

    assert_eq!(
        best,
        Some(ExcellentEmployee {
            employee_id: 2,
            employee_name: "Lee".to_string(),
        })
    );
}

#[tokio::test]
async fn excellent_employee_is_none_without_payments() {
    let (engine, _db) = seeded().await;

    let best = engine
        .excellent_employee(date(2023, 1, 1), date(2023, 1, 31))
        .await
        .unwrap();

    assert_eq!(best, None);
}
