//! Rename-and-rebuild evolution strategy: move each entity table aside,
//! recreate the current layout, copy rows column-by-column (the legacy
//! `works.date` column feeds `created_at`), then drop the renamed table.
//! Every step is caught and logged on its own so a partially-applied earlier
//! run, or one entity failing, cannot stop the rest of the migration.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement,
};
use tracing::{info, warn};

use crate::{normalize, services_table, works_table};

/// Destination column -> preferred source columns, first match wins.
type CopyPlan = &'static [(&'static str, &'static [&'static str])];

const SERVICES_COPY: CopyPlan = &[
    ("id", &["id"]),
    ("title", &["title"]),
    ("short_desc", &["short_desc"]),
    ("full_desc", &["full_desc"]),
    ("icon", &["icon"]),
    ("image", &["image"]),
    ("status", &["status"]),
    ("order", &["order"]),
];

const WORKS_COPY: CopyPlan = &[
    ("id", &["id"]),
    ("title", &["title"]),
    ("category", &["category"]),
    ("location", &["location"]),
    // legacy column first; a re-run copies the already-migrated name
    ("created_at", &["date", "created_at"]),
    ("description", &["description"]),
    ("image", &["image"]),
    ("status", &["status"]),
];

pub async fn run(db: &DatabaseConnection) -> Result<(), DbErr> {
    rebuild_table(db, "services", services_table(), SERVICES_COPY).await;
    rebuild_table(db, "works", works_table(), WORKS_COPY).await;
    normalize::normalize_status(db).await
}

async fn rebuild_table(
    db: &DatabaseConnection,
    table: &str,
    create: TableCreateStatement,
    plan: CopyPlan,
) {
    let manager = SchemaManager::new(db);
    let old = format!("{table}_old");

    // 1. Move the existing table aside.
    match manager
        .rename_table(Table::rename().table(Alias::new(table), Alias::new(&old)).to_owned())
        .await
    {
        Ok(_) => info!(table, old, "renamed table for rebuild"),
        Err(e) => warn!(table, error = %e, "rename skipped (table may already be renamed or schema partially applied)"),
    }

    // 2. Create the current layout.
    if let Err(e) = manager.create_table(create).await {
        warn!(table, error = %e, "creating current table failed");
    }

    // 3. Copy rows from the renamed table, matching columns explicitly.
    match manager.has_table(&old).await {
        Ok(true) => {
            if let Err(e) = copy_rows(db, table, &old, plan).await {
                warn!(table, error = %e, "copying rows failed");
            }
        }
        Ok(false) => warn!(table, old, "no renamed table to copy from"),
        Err(e) => warn!(table, error = %e, "could not check for renamed table"),
    }

    // 4. Drop the renamed table.
    match manager.drop_table(Table::drop().table(Alias::new(&old)).if_exists().to_owned()).await {
        Ok(_) => info!(old, "dropped renamed table"),
        Err(e) => warn!(old, error = %e, "dropping renamed table failed"),
    }
}

async fn copy_rows(
    db: &DatabaseConnection,
    table: &str,
    old: &str,
    plan: CopyPlan,
) -> Result<(), DbErr> {
    let old_cols = table_columns(db, old).await?;

    let mut dest = Vec::new();
    let mut src = Vec::new();
    for (dest_col, sources) in plan {
        if let Some(source) = sources.iter().find(|s| old_cols.iter().any(|c| c == *s)) {
            dest.push(format!("\"{dest_col}\""));
            src.push(format!("\"{source}\""));
        }
    }
    if dest.is_empty() {
        warn!(table, old, "renamed table shares no columns with the current layout");
        return Ok(());
    }

    let sql = format!(
        "INSERT INTO \"{table}\" ({}) SELECT {} FROM \"{old}\"",
        dest.join(", "),
        src.join(", "),
    );
    let res = db.execute_unprepared(&sql).await?;
    info!(table, rows = res.rows_affected(), "copied rows into rebuilt table");
    Ok(())
}

/// Column names of `table`, via SQLite's `PRAGMA table_info`.
pub(crate) async fn table_columns(
    db: &DatabaseConnection,
    table: &str,
) -> Result<Vec<String>, DbErr> {
    let rows = db
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("PRAGMA table_info(\"{table}\")"),
        ))
        .await?;
    rows.iter().map(|row| row.try_get::<String>("", "name")).collect()
}
