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
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(integer(Article::UserId))
                    .col(string_len(Article::Status, 20).default("draft"))
                    .col(timestamp_with_time_zone_null(Article::PublishedAt))
                    .col(string_len_null(Article::FeaturedImage, 255))
                    .col(big_integer(Article::ViewCount).default(0))
                    .col(boolean(Article::IsFeatured).default(false))
                    .col(timestamp_with_time_zone(Article::CreatedAt))
                    .col(timestamp_with_time_zone(Article::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Article::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_user_id")
                            .from(Article::Table, Article::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(ArticleTranslation::Id))
                    .col(integer(ArticleTranslation::ArticleId))
                    .col(string_len(ArticleTranslation::LanguageCode, 10))
                    .col(string_len(ArticleTranslation::Title, 200))
                    .col(string_len(ArticleTranslation::Slug, 255))
                    .col(string_len_null(ArticleTranslation::Excerpt, 500))
                    .col(text(ArticleTranslation::Content))
                    .col(string_len_null(ArticleTranslation::MetaTitle, 200))
                    .col(string_len_null(ArticleTranslation::MetaDescription, 500))
                    .col(string_len_null(ArticleTranslation::MetaKeywords, 255))
                    .col(timestamp_with_time_zone(ArticleTranslation::CreatedAt))
                    .col(timestamp_with_time_zone(ArticleTranslation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_translation_article_id")
                            .from(ArticleTranslation::Table, ArticleTranslation::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_translation_lang")
                    .table(ArticleTranslation::Table)
                    .col(ArticleTranslation::ArticleId)
                    .col(ArticleTranslation::LanguageCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_translation_slug_lang")
                    .table(ArticleTranslation::Table)
                    .col(ArticleTranslation::LanguageCode)
                    .col(ArticleTranslation::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_published_at")
                    .table(Article::Table)
                    .col(Article::PublishedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleTranslation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    UserId,
    Status,
    PublishedAt,
    FeaturedImage,
    ViewCount,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum ArticleTranslation {
    Table,
    Id,
    ArticleId,
    LanguageCode,
    Title,
    Slug,
    Excerpt,
    Content,
    MetaTitle,
    MetaDescription,
    MetaKeywords,
    CreatedAt,
    UpdatedAt,
}
