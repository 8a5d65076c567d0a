use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(pk_auto(Image::Id))
                    .col(integer(Image::UserId))
                    .col(string_len(Image::FileName, 255))
                    .col(string_len(Image::FilePath, 500))
                    .col(big_integer(Image::FileSize))
                    .col(integer_null(Image::Width))
                    .col(integer_null(Image::Height))
                    .col(string_len(Image::ContentType, 100))
                    .col(string_len_null(Image::Alt, 255))
                    .col(string_len_null(Image::Title, 255))
                    .col(string_len_null(Image::Usage, 50))
                    .col(timestamp_with_time_zone(Image::CreatedAt))
                    .col(timestamp_with_time_zone(Image::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Image::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_user_id")
                            .from(Image::Table, Image::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Image {
    Table,
    Id,
    UserId,
    FileName,
    FilePath,
    FileSize,
    Width,
    Height,
    ContentType,
    Alt,
    Title,
    Usage,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
