//! Status normalization lives here, not in the read/write paths: historical
//! rows can carry mixed-case status strings that the closed entity enums
//! cannot decode, so both evolution strategies finish with an upper-casing
//! pass.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::{info, warn};

pub async fn normalize_status(db: &DatabaseConnection) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db);

    let res = db
        .execute_unprepared("UPDATE \"services\" SET \"status\" = UPPER(\"status\")")
        .await?;
    info!(rows = res.rows_affected(), "normalized services status");

    if manager.has_table("works").await? {
        let res = db
            .execute_unprepared("UPDATE \"works\" SET \"status\" = UPPER(\"status\")")
            .await?;
        info!(rows = res.rows_affected(), "normalized works status");
    } else {
        warn!("works table not found; skipping status normalization");
    }
    Ok(())
}
