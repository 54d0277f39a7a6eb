use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Default FontAwesome tag applied when a service is created without one.
pub const DEFAULT_ICON: &str = "fa-check";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub short_desc: Option<String>,
    pub full_desc: Option<String>,
    pub icon: String,
    pub image: Option<String>,
    pub status: ServiceStatus,
    pub order: i32,
}

/// Controls public visibility. Stored as an upper-case string; historical
/// data is normalized by the migrator, never here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

impl ServiceStatus {
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<String, ModelError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("title must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

/// Empty or missing icon falls back to [`DEFAULT_ICON`].
pub fn normalize_icon(icon: Option<&str>) -> String {
    match icon {
        Some(i) if !i.trim().is_empty() => i.trim().to_string(),
        _ => DEFAULT_ICON.to_string(),
    }
}
