//! Additive evolution strategy: add each current-model column missing from
//! an existing entity table, with a usable default. Never drops or renames
//! anything, so it is safe to re-run; columns already present are skipped.

use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;
use sea_orm_migration::sea_orm::DatabaseConnection;
use tracing::info;

use crate::{normalize, services_table, works_table, Services, Works};

pub async fn run(db: &DatabaseConnection) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db);

    if !manager.has_table("services").await? {
        info!("services table absent; creating current layout");
        manager.create_table(services_table()).await?;
    } else {
        add_if_missing(&manager, "services", "short_desc", alter_services(string_len_null(Services::ShortDesc, 255))).await?;
        add_if_missing(&manager, "services", "full_desc", alter_services(text_null(Services::FullDesc))).await?;
        add_if_missing(&manager, "services", "icon", alter_services(string_len(Services::Icon, 50).default("fa-check").to_owned())).await?;
        add_if_missing(&manager, "services", "image", alter_services(string_len_null(Services::Image, 255))).await?;
        // NOT NULL needs a default here so pre-existing rows stay readable
        add_if_missing(&manager, "services", "status", alter_services(string_len(Services::Status, 20).not_null().default("ACTIVE").to_owned())).await?;
        add_if_missing(&manager, "services", "order", alter_services(integer(Services::Order).default(0).to_owned())).await?;
    }

    if !manager.has_table("works").await? {
        info!("works table absent; creating current layout");
        manager.create_table(works_table()).await?;
    } else {
        add_if_missing(&manager, "works", "category", alter_works(string_len_null(Works::Category, 50))).await?;
        add_if_missing(&manager, "works", "location", alter_works(string_len_null(Works::Location, 100))).await?;
        add_if_missing(&manager, "works", "created_at", alter_works(string_len_null(Works::CreatedAt, 50))).await?;
        add_if_missing(&manager, "works", "description", alter_works(text_null(Works::Description))).await?;
        add_if_missing(&manager, "works", "image", alter_works(string_len_null(Works::Image, 255))).await?;
        add_if_missing(&manager, "works", "status", alter_works(string_len(Works::Status, 20).not_null().default("VISIBLE").to_owned())).await?;
    }

    normalize::normalize_status(db).await
}

fn alter_services(col: ColumnDef) -> TableAlterStatement {
    Table::alter().table(Services::Table).add_column(col).to_owned()
}

fn alter_works(col: ColumnDef) -> TableAlterStatement {
    Table::alter().table(Works::Table).add_column(col).to_owned()
}

async fn add_if_missing(
    manager: &SchemaManager<'_>,
    table: &str,
    column: &str,
    alter: TableAlterStatement,
) -> Result<(), DbErr> {
    if manager.has_column(table, column).await? {
        return Ok(());
    }
    info!(table, column, "adding missing column");
    manager.alter_table(alter).await
}
