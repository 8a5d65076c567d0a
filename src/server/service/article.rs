use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr};
use std::collections::BTreeSet;

use crate::server::{
    data::{article::ArticleRepository, category::CategoryRepository, tag::TagRepository},
    error::{internal::InternalError, AppError},
    model::{
        article::{
            published_at_after, ArticleFilter, ArticleTranslationParams, ArticleWithRelations,
            CreateArticleParams, PublishedQuery, UpdateArticleParams,
        },
        pagination::{Page, PageRequest},
    },
    service::{
        language::LanguageService,
        translatable::{TranslatableService, TranslatableStore},
    },
};

/// Default page size for article listings.
pub const ARTICLE_PAGE_SIZE: u64 = 10;

/// Number of articles returned by the featured listing unless the caller asks otherwise.
pub const FEATURED_LIMIT: u64 = 5;
/// Number of articles returned by the latest listing unless the caller asks otherwise.
pub const LATEST_LIMIT: u64 = 3;
/// Number of articles returned by the by-category listing unless the caller asks otherwise.
pub const BY_CATEGORY_LIMIT: u64 = 2;

/// Translation hooks for articles: status transitions and tag/category links.
pub struct ArticleStore;

impl ArticleStore {
    /// Fails with NotFound unless every ID names a live tag and a live category.
    async fn require_links(
        &self,
        txn: &DatabaseTransaction,
        tag_ids: Option<&[i32]>,
        category_ids: Option<&[i32]>,
    ) -> Result<(), AppError> {
        if let Some(ids) = tag_ids {
            let wanted = distinct(ids);
            if !wanted.is_empty()
                && TagRepository::new(txn).count_live(&wanted).await? != wanted.len() as u64
            {
                return Err(AppError::NotFound(
                    "One or more tags were not found".to_string(),
                ));
            }
        }

        if let Some(ids) = category_ids {
            let wanted = distinct(ids);
            if !wanted.is_empty()
                && CategoryRepository::new(txn).count_live(&wanted).await?
                    != wanted.len() as u64
            {
                return Err(AppError::NotFound(
                    "One or more categories were not found".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl TranslatableStore for ArticleStore {
    type Create = CreateArticleParams;
    type Update = UpdateArticleParams;
    type Translation = ArticleTranslationParams;

    const NAME: &'static str = "article";

    async fn validate_create(
        &self,
        txn: &DatabaseTransaction,
        params: &CreateArticleParams,
    ) -> Result<(), AppError> {
        self.require_links(
            txn,
            Some(params.tag_ids.as_slice()),
            Some(params.category_ids.as_slice()),
        )
        .await
    }

    async fn validate_update(
        &self,
        txn: &DatabaseTransaction,
        _id: i32,
        params: &UpdateArticleParams,
    ) -> Result<(), AppError> {
        self.require_links(
            txn,
            params.tag_ids.as_deref(),
            params.category_ids.as_deref(),
        )
        .await
    }

    async fn insert_base(
        &self,
        txn: &DatabaseTransaction,
        params: CreateArticleParams,
    ) -> Result<i32, AppError> {
        let repo = ArticleRepository::new(txn);

        let published_at = published_at_after(params.status, None, Utc::now());
        let article = repo.create(&params, published_at).await?;

        repo.replace_tags(article.id, &params.tag_ids).await?;
        repo.replace_categories(article.id, &params.category_ids)
            .await?;

        Ok(article.id)
    }

    async fn update_base(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        params: UpdateArticleParams,
    ) -> Result<(), AppError> {
        let repo = ArticleRepository::new(txn);

        let Some(article) = repo.find_live(id).await? else {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        };

        let status = params.status.unwrap_or(article.status);
        let published_at = published_at_after(status, article.published_at, Utc::now());
        let featured_image = match params.featured_image {
            Some(image) => Some(image),
            None => article.featured_image.clone(),
        };
        let is_featured = params.is_featured.unwrap_or(article.is_featured);

        repo.update(article, status, published_at, featured_image, is_featured)
            .await?;

        if let Some(tag_ids) = &params.tag_ids {
            repo.replace_tags(id, tag_ids).await?;
        }
        if let Some(category_ids) = &params.category_ids {
            repo.replace_categories(id, category_ids).await?;
        }

        Ok(())
    }

    async fn is_live(&self, txn: &DatabaseTransaction, id: i32) -> Result<bool, DbErr> {
        Ok(ArticleRepository::new(txn).find_live(id).await?.is_some())
    }

    async fn save_translation(
        &self,
        txn: &DatabaseTransaction,
        id: i32,
        translation: &ArticleTranslationParams,
    ) -> Result<(), DbErr> {
        let repo = ArticleRepository::new(txn);

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
        ArticleRepository::new(txn)
            .slug_owner(language_code, slug)
            .await
    }

    async fn delete_translations(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        ArticleRepository::new(txn).delete_translations(id).await
    }

    async fn tombstone(&self, txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        ArticleRepository::new(txn).tombstone(id).await
    }
}

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an article with its translations and links, returning the full article
    pub async fn create(
        &self,
        params: CreateArticleParams,
        translations: Vec<ArticleTranslationParams>,
    ) -> Result<ArticleWithRelations, AppError> {
        let id = TranslatableService::new(self.db, ArticleStore)
            .create(params, translations)
            .await?;

        ArticleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "article", id }.into())
    }

    /// Updates base fields, links and translations of a live article
    ///
    /// Moving into `published` stamps `published_at` the first time only.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateArticleParams,
        translations: Vec<ArticleTranslationParams>,
    ) -> Result<ArticleWithRelations, AppError> {
        TranslatableService::new(self.db, ArticleStore)
            .update(id, params, translations)
            .await?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        TranslatableService::new(self.db, ArticleStore)
            .delete(id)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ArticleWithRelations, AppError> {
        ArticleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        filter: ArticleFilter,
        page: PageRequest,
    ) -> Result<Page<ArticleWithRelations>, AppError> {
        let (articles, total) = ArticleRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Page::new(articles, total, page))
    }

    /// Gets a published article by slug and records the view
    ///
    /// `language` defaults to the registry's default language. The returned article
    /// already reflects the incremented view count.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        language: Option<String>,
    ) -> Result<ArticleWithRelations, AppError> {
        let language = LanguageService::new(self.db).resolve_code(language).await?;
        let repo = ArticleRepository::new(self.db);

        let Some(mut article) = repo.find_published_by_slug(slug, &language).await? else {
            return Err(AppError::NotFound(format!(
                "No published article with slug '{}' in '{}'",
                slug, language
            )));
        };

        repo.increment_view_count(article.article.id).await?;
        article.article.view_count += 1;

        Ok(article)
    }

    pub async fn get_featured(
        &self,
        language: Option<String>,
        limit: Option<i64>,
    ) -> Result<Vec<ArticleWithRelations>, AppError> {
        self.get_published(true, None, language, limit, FEATURED_LIMIT)
            .await
    }

    pub async fn get_latest(
        &self,
        language: Option<String>,
        limit: Option<i64>,
    ) -> Result<Vec<ArticleWithRelations>, AppError> {
        self.get_published(false, None, language, limit, LATEST_LIMIT)
            .await
    }

    /// Gets published articles linked to the category whose slug matches in `language`
    pub async fn get_by_category_slug(
        &self,
        category_slug: String,
        language: Option<String>,
        limit: Option<i64>,
    ) -> Result<Vec<ArticleWithRelations>, AppError> {
        self.get_published(
            false,
            Some(category_slug),
            language,
            limit,
            BY_CATEGORY_LIMIT,
        )
        .await
    }

    async fn get_published(
        &self,
        featured_only: bool,
        category_slug: Option<String>,
        language: Option<String>,
        limit: Option<i64>,
        default_limit: u64,
    ) -> Result<Vec<ArticleWithRelations>, AppError> {
        let query = PublishedQuery {
            featured_only,
            category_slug,
            language: LanguageService::new(self.db).resolve_code(language).await?,
            limit: match limit {
                Some(l) if l > 0 => l as u64,
                _ => default_limit,
            },
        };

        Ok(ArticleRepository::new(self.db)
            .get_published(&query)
            .await?)
    }
}

fn distinct(ids: &[i32]) -> Vec<i32> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}
