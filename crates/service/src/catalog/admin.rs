//! Authenticated catalog mutations. Each operation is a single store-level
//! transaction; updates that reference an unknown id fail with NotFound and
//! never fall back to creating a record.

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set, TransactionTrait,
};
use tracing::{debug, info};

use models::service::{self, ServiceStatus};
use models::work::{self, WorkStatus};

use crate::catalog::domain::{ServiceUpsert, WorkUpsert};
use crate::errors::ServiceError;

/// Create or update a service; returns the persisted id.
pub async fn upsert_service(
    db: &DatabaseConnection,
    input: ServiceUpsert,
) -> Result<i32, ServiceError> {
    match input {
        ServiceUpsert::Create { client_ref, fields } => {
            if let Some(placeholder) = client_ref {
                debug!(%placeholder, "discarding client placeholder id");
            }
            let title = service::validate_title(&fields.title)?;
            let am = service::ActiveModel {
                id: NotSet,
                title: Set(title),
                short_desc: Set(fields.short_desc),
                full_desc: Set(fields.full_desc),
                icon: Set(service::normalize_icon(fields.icon.as_deref())),
                image: Set(fields.image),
                status: Set(ServiceStatus::from_active(fields.active)),
                order: Set(fields.order),
            };
            let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
            info!(id = created.id, title = %created.title, "created service");
            Ok(created.id)
        }
        ServiceUpsert::Update { id, fields } => {
            let title = service::validate_title(&fields.title)?;
            let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
            let mut am: service::ActiveModel = service::Entity::find_by_id(id)
                .one(&txn)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?
                .ok_or_else(|| ServiceError::not_found("service"))?
                .into();
            am.title = Set(title);
            am.short_desc = Set(fields.short_desc);
            am.full_desc = Set(fields.full_desc);
            am.icon = Set(service::normalize_icon(fields.icon.as_deref()));
            am.image = Set(fields.image);
            am.status = Set(ServiceStatus::from_active(fields.active));
            am.order = Set(fields.order);
            am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
            txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
            info!(id, "updated service");
            Ok(id)
        }
    }
}

/// Permanent removal; unknown id is a caller contract violation.
pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = service::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("service"));
    }
    info!(id, "deleted service");
    Ok(())
}

/// Create or update a work; the external `date` field lands in `created_at`.
pub async fn upsert_work(db: &DatabaseConnection, input: WorkUpsert) -> Result<i32, ServiceError> {
    match input {
        WorkUpsert::Create { client_ref, fields } => {
            if let Some(placeholder) = client_ref {
                debug!(%placeholder, "discarding client placeholder id");
            }
            let title = work::validate_title(&fields.title)?;
            let am = work::ActiveModel {
                id: NotSet,
                title: Set(title),
                category: Set(fields.category),
                location: Set(fields.location),
                created_at: Set(fields.date),
                description: Set(fields.description),
                image: Set(fields.image),
                status: Set(WorkStatus::from_active(fields.active)),
            };
            let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
            info!(id = created.id, title = %created.title, "created work");
            Ok(created.id)
        }
        WorkUpsert::Update { id, fields } => {
            let title = work::validate_title(&fields.title)?;
            let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
            let mut am: work::ActiveModel = work::Entity::find_by_id(id)
                .one(&txn)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?
                .ok_or_else(|| ServiceError::not_found("work"))?
                .into();
            am.title = Set(title);
            am.category = Set(fields.category);
            am.location = Set(fields.location);
            am.created_at = Set(fields.date);
            am.description = Set(fields.description);
            am.image = Set(fields.image);
            am.status = Set(WorkStatus::from_active(fields.active));
            am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
            txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
            info!(id, "updated work");
            Ok(id)
        }
    }
}

pub async fn delete_work(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = work::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("work"));
    }
    info!(id, "deleted work");
    Ok(())
}

/// Full, unfiltered listings for the management UI.
pub async fn list_all_services(
    db: &DatabaseConnection,
) -> Result<Vec<service::Model>, ServiceError> {
    service::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn list_all_works(db: &DatabaseConnection) -> Result<Vec<work::Model>, ServiceError> {
    work::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
