use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(integer_null(Category::ParentId))
                    .col(timestamp_with_time_zone(Category::CreatedAt))
                    .col(timestamp_with_time_zone(Category::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Category::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_parent_id")
                            .from(Category::Table, Category::ParentId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CategoryTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(CategoryTranslation::Id))
                    .col(integer(CategoryTranslation::CategoryId))
                    .col(string_len(CategoryTranslation::LanguageCode, 10))
                    .col(string_len(CategoryTranslation::Name, 100))
                    .col(string_len(CategoryTranslation::Slug, 150))
                    .col(string_len_null(CategoryTranslation::Description, 500))
                    .col(timestamp_with_time_zone(CategoryTranslation::CreatedAt))
                    .col(timestamp_with_time_zone(CategoryTranslation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_translation_category_id")
                            .from(CategoryTranslation::Table, CategoryTranslation::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_category_translation_lang")
                    .table(CategoryTranslation::Table)
                    .col(CategoryTranslation::CategoryId)
                    .col(CategoryTranslation::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_category_translation_slug_lang")
                    .table(CategoryTranslation::Table)
                    .col(CategoryTranslation::LanguageCode)
                    .col(CategoryTranslation::Slug)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryTranslation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    ParentId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum CategoryTranslation {
    Table,
    Id,
    CategoryId,
    LanguageCode,
    Name,
    Slug,
    Description,
    CreatedAt,
    UpdatedAt,
}
