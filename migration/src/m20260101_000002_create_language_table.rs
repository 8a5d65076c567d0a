use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Code uniqueness is checked against live rows only, so no unique index here.
        manager
            .create_table(
                Table::create()
                    .table(Language::Table)
                    .if_not_exists()
                    .col(pk_auto(Language::Id))
                    .col(string_len(Language::Code, 10))
                    .col(string_len(Language::Name, 50))
                    .col(string_len(Language::NativeName, 50))
                    .col(boolean(Language::IsActive).default(true))
                    .col(boolean(Language::IsDefault).default(false))
                    .col(string_len(Language::Direction, 3).default("ltr"))
                    .col(integer(Language::SortOrder).default(0))
                    .col(timestamp_with_time_zone(Language::CreatedAt))
                    .col(timestamp_with_time_zone(Language::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Language::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_language_code")
                    .table(Language::Table)
                    .col(Language::Code)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Language::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Language {
    Table,
    Id,
    Code,
    Name,
    NativeName,
    IsActive,
    IsDefault,
    Direction,
    SortOrder,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
