use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use tracing::warn;

use models::probe::{count_optional_table, OptionalCount};

use crate::errors::ServiceError;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub services: u64,
    pub works: u64,
    pub enquiries: u64,
    pub bookings: u64,
}

/// Entity counts for the management dashboard. Services and works are
/// required tables, so their errors surface; enquiries and bookings may not
/// exist in a given deployment and degrade to zero with a warning.
pub async fn summary(db: &DatabaseConnection) -> Result<DashboardSummary, ServiceError> {
    let services = models::service::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let works = models::work::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let enquiries = optional_count(db, "enquiries").await?;
    let bookings = optional_count(db, "bookings").await?;
    Ok(DashboardSummary { services, works, enquiries, bookings })
}

async fn optional_count(db: &DatabaseConnection, table: &str) -> Result<u64, ServiceError> {
    match count_optional_table(db, table).await? {
        OptionalCount::Available(n) => Ok(n),
        OptionalCount::Unavailable => {
            warn!(table, "optional table unavailable, reporting zero records");
            Ok(0)
        }
    }
}
