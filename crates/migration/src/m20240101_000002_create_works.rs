use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(works_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Works::Table).to_owned()).await
    }
}

/// Current `works` layout; shared with the rebuild strategy.
/// `created_at` holds a short textual date; the legacy column was `date`.
pub(crate) fn works_table() -> TableCreateStatement {
    Table::create()
        .table(Works::Table)
        .if_not_exists()
        .col(pk_auto(Works::Id))
        .col(string_len(Works::Title, 100).not_null())
        .col(string_len_null(Works::Category, 50))
        .col(string_len_null(Works::Location, 100))
        .col(string_len_null(Works::CreatedAt, 50))
        .col(text_null(Works::Description))
        .col(string_len_null(Works::Image, 255))
        .col(string_len(Works::Status, 20).not_null().default("VISIBLE"))
        .to_owned()
}

#[derive(DeriveIden)]
pub(crate) enum Works {
    Table,
    Id,
    Title,
    Category,
    Location,
    CreatedAt,
    Description,
    Image,
    Status,
}
