use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "works")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category: Option<String>,
    pub location: Option<String>,
    /// Short textual date, e.g. `2025-07-20`. Named `date` in legacy
    /// deployments; the rebuild migration maps it over.
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: WorkStatus,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkStatus {
    #[sea_orm(string_value = "VISIBLE")]
    Visible,
    #[sea_orm(string_value = "HIDDEN")]
    Hidden,
}

impl WorkStatus {
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
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
