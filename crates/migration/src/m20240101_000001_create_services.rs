use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(services_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

/// Current `services` layout; shared with the rebuild strategy.
pub(crate) fn services_table() -> TableCreateStatement {
    Table::create()
        .table(Services::Table)
        .if_not_exists()
        .col(pk_auto(Services::Id))
        .col(string_len(Services::Title, 100).not_null())
        .col(string_len_null(Services::ShortDesc, 255))
        .col(text_null(Services::FullDesc))
        .col(string_len(Services::Icon, 50).default("fa-check"))
        .col(string_len_null(Services::Image, 255))
        .col(string_len(Services::Status, 20).not_null().default("ACTIVE"))
        .col(integer(Services::Order).default(0))
        .to_owned()
}

#[derive(DeriveIden)]
pub(crate) enum Services {
    Table,
    Id,
    Title,
    ShortDesc,
    FullDesc,
    Icon,
    Image,
    Status,
    Order,
}
