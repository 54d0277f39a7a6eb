use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};

use crate::rebuild::table_columns;
use crate::{additive, rebuild, Migrator, MigratorTrait};

/// Single-connection pool: each in-memory SQLite connection is its own
/// database, so the pool must never open a second one.
async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1);
    Database::connect(opts).await.expect("connect in-memory sqlite")
}

async fn count(db: &DatabaseConnection, sql: &str) -> i64 {
    db.query_one(Statement::from_string(DatabaseBackend::Sqlite, sql.to_owned()))
        .await
        .expect("count query")
        .expect("count row")
        .try_get::<i64>("", "n")
        .expect("count column")
}

#[tokio::test]
async fn baseline_up_is_idempotent() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.expect("first up");
    Migrator::up(&db, None).await.expect("second up");

    db.execute_unprepared(
        "INSERT INTO services (title, status) VALUES ('Wedding Planning', 'ACTIVE')",
    )
    .await
    .expect("insert into created schema");
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM services").await, 1);
}

#[tokio::test]
async fn additive_fills_missing_columns_and_is_idempotent() {
    let db = memory_db().await;
    db.execute_unprepared(
        "CREATE TABLE services (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL, short_desc TEXT, icon TEXT, status TEXT)",
    )
    .await
    .unwrap();
    db.execute_unprepared(
        "INSERT INTO services (title, short_desc, icon, status) VALUES ('Catering', 'Curated menus', 'fa-utensils', 'active')",
    )
    .await
    .unwrap();

    additive::run(&db).await.expect("first additive run");
    let cols_first = table_columns(&db, "services").await.unwrap();
    for col in ["full_desc", "image", "order"] {
        assert!(cols_first.contains(&col.to_string()), "missing {col}");
    }

    additive::run(&db).await.expect("second additive run");
    let cols_second = table_columns(&db, "services").await.unwrap();
    assert_eq!(cols_first, cols_second);

    // row survived both runs, status upper-cased by the normalization pass
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM services").await, 1);
    assert_eq!(
        count(&db, "SELECT COUNT(*) AS n FROM services WHERE status = 'ACTIVE'").await,
        1
    );
}

#[tokio::test]
async fn rebuild_maps_legacy_date_onto_created_at() {
    let db = memory_db().await;
    db.execute_unprepared(
        "CREATE TABLE works (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL, category TEXT, location TEXT, date TEXT, image TEXT, status TEXT)",
    )
    .await
    .unwrap();
    db.execute_unprepared(
        "INSERT INTO works (title, category, location, date, status) VALUES ('Summer Gala', 'Corporate', 'Beach Club', '2025-07-20', 'Visible')",
    )
    .await
    .unwrap();
    db.execute_unprepared(
        "CREATE TABLE services (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL, status TEXT)",
    )
    .await
    .unwrap();

    rebuild::run(&db).await.expect("rebuild run");

    let cols = table_columns(&db, "works").await.unwrap();
    assert!(cols.contains(&"created_at".to_string()));
    assert!(!cols.contains(&"date".to_string()));

    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT created_at, status FROM works".to_owned(),
        ))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.try_get::<String>("", "created_at").unwrap(), "2025-07-20");
    assert_eq!(row.try_get::<String>("", "status").unwrap(), "VISIBLE");

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("works_old").await.unwrap());
    assert!(!manager.has_table("services_old").await.unwrap());
}

#[tokio::test]
async fn rebuild_twice_does_not_duplicate_rows() {
    let db = memory_db().await;
    db.execute_unprepared(
        "CREATE TABLE works (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL, date TEXT, status TEXT)",
    )
    .await
    .unwrap();
    db.execute_unprepared(
        "INSERT INTO works (title, date, status) VALUES ('Summer Gala', '2025-07-20', 'VISIBLE')",
    )
    .await
    .unwrap();
    db.execute_unprepared(
        "CREATE TABLE services (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL, status TEXT)",
    )
    .await
    .unwrap();

    rebuild::run(&db).await.expect("first rebuild");
    rebuild::run(&db).await.expect("second rebuild");

    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM works").await, 1);
    assert_eq!(
        count(&db, "SELECT COUNT(*) AS n FROM works WHERE created_at = '2025-07-20'").await,
        1
    );
}
