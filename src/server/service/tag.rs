use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr};

use crate::server::{
    data::tag::TagRepository,
    error::{internal::InternalError, AppError},
    model::{
        pagination::{Page, PageRequest, SortDirection},
        tag::{TagFilter, TagTranslationParams, TagWithTranslations},
    },
    service::{
        language::LanguageService,
        translatable::{TranslatableService, TranslatableStore},
    },
};

/// Default page size for tag listings.
pub const TAG_PAGE_SIZE: u64 = 20;

/// Translation hooks for tags. Tags carry no base fields beyond their timestamps.
pub struct TagStore;

#[async_trait]
impl TranslatableStore for TagStore {
    type Create = ();
    type Update = ();
    type Translation = TagTranslationParams;

    const NAME: &'static str = "tag";

    async fn insert_base(&self, txn: &DatabaseTransaction, _params: ()) -> Result<i32, AppError> {
        Ok(TagRepository::new(txn).create().await?.id)
    }

    async fn update_base(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        _params: (),
    ) -> Result<(), AppError> {
        TagRepository::new(txn).touch(id).await?;
        Ok(())
    }

    async fn is_live(&self, txn: &DatabaseTransaction, id: i32) -> Result<bool, DbErr> {
        Ok(TagRepository::new(txn).find_live(id).await?.is_some())
    }

    async fn save_translation(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        translation: &TagTranslationParams,
    ) -> Result<(), DbErr> {
        let repo = TagRepository::new(txn);

        match repo.find_translation(id, &translation.language_code).await? {
            Some(existing) => repo.update_translation(existing, translation).await?,
            None => repo.create_translation(id, translation).await?,
        };

        Ok(())
    }

    async fn slug_owner(
        &self,
        txn: &DatabaseTransaction,
        language_code: &str,
        slug: &str,
    ) -> Result<Option<i32>, DbErr> {
        TagRepository::new(txn).slug_owner(language_code, slug).await
    }

    async fn check_delete(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        if TagRepository::new(txn).is_linked(id).await? {
            return Err(AppError::Conflict(format!(
                "Tag {} is still linked to articles",
                id
            )));
        }

        Ok(())
    }

    async fn delete_translations(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        TagRepository::new(txn).delete_translations(id).await
    }

    async fn tombstone(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        TagRepository::new(txn).tombstone(id).await
    }
}

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tag with its translations and returns it
    pub async fn create(
        &self,
        translations: Vec<TagTranslationParams>,
    ) -> Result<TagWithTranslations, AppError> {
        let id = TranslatableService::new(self.db, TagStore)
            .create((), translations)
            .await?;

        TagRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "tag", id }.into())
    }

    /// Adds or overwrites translations of a live tag and returns it
    pub async fn update(
        &self,
        id: i32,
        translations: Vec<TagTranslationParams>,
    ) -> Result<TagWithTranslations, AppError> {
        TranslatableService::new(self.db, TagStore)
            .update(id, (), translations)
            .await?;

        self.get_by_id(id).await
    }

    /// Deletes a tag unless an article still links to it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        TranslatableService::new(self.db, TagStore).delete(id).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TagWithTranslations, AppError> {
        TagRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tag {} not found", id)))
    }

    /// Gets a tag by its slug in `language`, which defaults to the default language
    pub async fn get_by_slug(
        &self,
        slug: &str,
        language: Option<String>,
    ) -> Result<TagWithTranslations, AppError> {
        let language = LanguageService::new(self.db).resolve_code(language).await?;

        TagRepository::new(self.db)
            .find_by_slug(slug, &language)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No tag with slug '{}' in '{}'", slug, language))
            })
    }

    pub async fn get_paginated(
        &self,
        filter: TagFilter,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<Page<TagWithTranslations>, AppError> {
        let (tags, total) = TagRepository::new(self.db)
            .get_paginated(&filter, direction, page)
            .await?;

        Ok(Page::new(tags, total, page))
    }
}
