use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, Set};

use super::setup_test_db;
use crate::service::{self, ServiceStatus};
use crate::work::{self, WorkStatus};

#[tokio::test]
async fn service_insert_and_read_back() -> Result<()> {
    let db = setup_test_db().await?;

    let am = service::ActiveModel {
        id: NotSet,
        title: Set("Wedding Planning".into()),
        short_desc: Set(Some("Elegant weddings.".into())),
        full_desc: Set(Some("Full wedding services.".into())),
        icon: Set("fa-ring".into()),
        image: Set(None),
        status: Set(ServiceStatus::Active),
        order: Set(1),
    };
    let created = am.insert(&db).await?;
    assert!(created.id > 0);

    let found = service::Entity::find_by_id(created.id).one(&db).await?;
    let found = found.expect("service should exist");
    assert_eq!(found.title, "Wedding Planning");
    assert_eq!(found.status, ServiceStatus::Active);
    assert_eq!(found.order, 1);

    // status round-trips through its string representation
    let by_status = service::Entity::find()
        .filter(service::Column::Status.eq(ServiceStatus::Active))
        .all(&db)
        .await?;
    assert_eq!(by_status.len(), 1);
    Ok(())
}

#[tokio::test]
async fn work_insert_and_delete() -> Result<()> {
    let db = setup_test_db().await?;

    let am = work::ActiveModel {
        id: NotSet,
        title: Set("Summer Gala".into()),
        category: Set(Some("Corporate".into())),
        location: Set(Some("Beach Club".into())),
        created_at: Set(Some("2025-07-20".into())),
        description: Set(None),
        image: Set(None),
        status: Set(WorkStatus::Visible),
    };
    let created = am.insert(&db).await?;

    let res = work::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    assert!(work::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[test]
fn title_validation_rejects_blank() {
    assert!(service::validate_title("  ").is_err());
    assert!(work::validate_title("").is_err());
    assert_eq!(service::validate_title(" Catering ").unwrap(), "Catering");
}

#[test]
fn status_maps_from_active_flag() {
    assert_eq!(ServiceStatus::from_active(true), ServiceStatus::Active);
    assert_eq!(ServiceStatus::from_active(false), ServiceStatus::Inactive);
    assert_eq!(WorkStatus::from_active(true), WorkStatus::Visible);
    assert_eq!(WorkStatus::from_active(false), WorkStatus::Hidden);
    assert!(!ServiceStatus::Inactive.is_active());
    assert!(!WorkStatus::Hidden.is_visible());
}

#[test]
fn icon_falls_back_to_default() {
    assert_eq!(service::normalize_icon(None), service::DEFAULT_ICON);
    assert_eq!(service::normalize_icon(Some("  ")), service::DEFAULT_ICON);
    assert_eq!(service::normalize_icon(Some("fa-star")), "fa-star");
}
