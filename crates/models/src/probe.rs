use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use crate::errors::ModelError;

/// Result of probing a table that may not exist in this deployment.
/// Absence is a distinct outcome so callers decide what to do with it,
/// instead of treating "no table" and "no rows" as the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalCount {
    Available(u64),
    Unavailable,
}

/// Count rows in an optional table (enquiries, bookings). Checks
/// `sqlite_master` first rather than sniffing error messages.
pub async fn count_optional_table(
    db: &DatabaseConnection,
    table: &str,
) -> Result<OptionalCount, ModelError> {
    let exists = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
            [table.into()],
        ))
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    if exists.is_none() {
        return Ok(OptionalCount::Unavailable);
    }

    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("SELECT COUNT(*) AS n FROM \"{table}\""),
        ))
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    let n = match row {
        Some(row) => row.try_get::<i64>("", "n").map_err(|e| ModelError::Db(e.to_string()))?,
        None => 0,
    };
    Ok(OptionalCount::Available(n as u64))
}
