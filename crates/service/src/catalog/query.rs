//! Public read projections. Pure reads: nothing here creates, mutates, or
//! destroys records, and non-visible rows are filtered out at the query.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use models::service::{self, ServiceStatus};
use models::work::{self, WorkStatus};

use crate::errors::ServiceError;

/// ACTIVE services, display order ascending, ties broken by id so the
/// listing is deterministic without a uniqueness constraint on `order`.
pub async fn list_services(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<service::Model>, ServiceError> {
    service::Entity::find()
        .filter(service::Column::Status.eq(ServiceStatus::Active))
        .order_by_asc(service::Column::Order)
        .order_by_asc(service::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// VISIBLE works, newest first by their textual date, ties broken by id
/// descending.
pub async fn list_works(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<work::Model>, ServiceError> {
    work::Entity::find()
        .filter(work::Column::Status.eq(WorkStatus::Visible))
        .order_by_desc(work::Column::CreatedAt)
        .order_by_desc(work::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
