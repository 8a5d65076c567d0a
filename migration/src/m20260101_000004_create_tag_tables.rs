use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(pk_auto(Tag::Id))
                    .col(timestamp_with_time_zone(Tag::CreatedAt))
                    .col(timestamp_with_time_zone(Tag::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Tag::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TagTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(TagTranslation::Id))
                    .col(integer(TagTranslation::TagId))
                    .col(string_len(TagTranslation::LanguageCode, 10))
                    .col(string_len(TagTranslation::Name, 50))
                    .col(string_len(TagTranslation::Slug, 100))
                    .col(timestamp_with_time_zone(TagTranslation::CreatedAt))
                    .col(timestamp_with_time_zone(TagTranslation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_translation_tag_id")
                            .from(TagTranslation::Table, TagTranslation::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tag_translation_lang")
                    .table(TagTranslation::Table)
                    .col(TagTranslation::TagId)
                    .col(TagTranslation::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tag_translation_slug_lang")
                    .table(TagTranslation::Table)
                    .col(TagTranslation::LanguageCode)
                    .col(TagTranslation::Slug)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TagTranslation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tag {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum TagTranslation {
    Table,
    Id,
    TagId,
    LanguageCode,
    Name,
    Slug,
    CreatedAt,
    UpdatedAt,
}
