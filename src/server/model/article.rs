//! Article domain models, parameters and the publication state transition.

use chrono::{DateTime, Utc};
use entity::article::ArticleStatus;

use crate::{
    model::article::{
        ArticleDto, ArticleTranslationDto, ArticleTranslationInputDto, AuthorDto,
        CreateArticleDto, UpdateArticleDto,
    },
    server::{
        error::AppError,
        model::{
            category::CategoryWithTranslations,
            pagination::SortDirection,
            tag::TagWithTranslations,
            translation::{require, TranslationInput},
        },
        util::slug::resolve_slug,
    },
};

/// Returns the `published_at` value an article should carry after moving to `next`.
///
/// Entering `published` stamps `now` unless a timestamp already exists. Leaving
/// `published` keeps the existing timestamp.
pub fn published_at_after(
    next: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (next, published_at) {
        (ArticleStatus::Published, None) => Some(now),
        (_, existing) => existing,
    }
}

/// An article with its author, translations and linked tags and categories.
#[derive(Debug, Clone)]
pub struct ArticleWithRelations {
    pub article: entity::article::Model,
    pub author: Option<entity::user::Model>,
    pub translations: Vec<entity::article_translation::Model>,
    pub tags: Vec<TagWithTranslations>,
    pub categories: Vec<CategoryWithTranslations>,
}

impl ArticleWithRelations {
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.article.id,
            author: self.author.map(|u| AuthorDto {
                id: u.id,
                username: u.username,
            }),
            status: self.article.status,
            published_at: self.article.published_at,
            featured_image: self.article.featured_image,
            view_count: self.article.view_count,
            is_featured: self.article.is_featured,
            translations: self
                .translations
                .into_iter()
                .map(|t| ArticleTranslationDto {
                    language_code: t.language_code,
                    title: t.title,
                    slug: t.slug,
                    excerpt: t.excerpt,
                    content: t.content,
                    meta_title: t.meta_title,
                    meta_description: t.meta_description,
                    meta_keywords: t.meta_keywords,
                })
                .collect(),
            tags: self.tags.into_iter().map(|t| t.into_dto()).collect(),
            categories: self.categories.into_iter().map(|c| c.into_dto()).collect(),
            created_at: self.article.created_at,
            updated_at: self.article.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleTranslationParams {
    pub language_code: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

impl ArticleTranslationParams {
    pub fn from_dto(dto: ArticleTranslationInputDto) -> Self {
        Self {
            language_code: dto.language_code,
            title: dto.title,
            slug: dto.slug,
            excerpt: dto.excerpt,
            content: dto.content,
            meta_title: dto.meta_title,
            meta_description: dto.meta_description,
            meta_keywords: dto.meta_keywords,
        }
    }
}

impl TranslationInput for ArticleTranslationParams {
    fn language_code(&self) -> &str {
        &self.language_code
    }

    fn normalize(&mut self) -> Result<(), AppError> {
        require("language_code", &mut self.language_code)?;
        require("title", &mut self.title)?;
        require("content", &mut self.content)?;
        self.slug = resolve_slug(&self.slug, &self.title)?;
        Ok(())
    }

    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    pub author_id: i32,
    pub status: ArticleStatus,
    pub featured_image: Option<String>,
    pub is_featured: bool,
    pub tag_ids: Vec<i32>,
    pub category_ids: Vec<i32>,
}

impl CreateArticleParams {
    /// Splits the request into base parameters and translations.
    pub fn from_dto(
        author_id: i32,
        dto: CreateArticleDto,
    ) -> (Self, Vec<ArticleTranslationParams>) {
        (
            Self {
                author_id,
                status: dto.status.unwrap_or(ArticleStatus::Draft),
                featured_image: dto.featured_image,
                is_featured: dto.is_featured,
                tag_ids: dto.tag_ids,
                category_ids: dto.category_ids,
            },
            dto.translations
                .into_iter()
                .map(ArticleTranslationParams::from_dto)
                .collect(),
        )
    }
}

/// Partial update; `None` keeps the current value or link set.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleParams {
    pub status: Option<ArticleStatus>,
    pub featured_image: Option<String>,
    pub is_featured: Option<bool>,
    pub tag_ids: Option<Vec<i32>>,
    pub category_ids: Option<Vec<i32>>,
}

impl UpdateArticleParams {
    pub fn from_dto(dto: UpdateArticleDto) -> (Self, Vec<ArticleTranslationParams>) {
        (
            Self {
                status: dto.status,
                featured_image: dto.featured_image,
                is_featured: dto.is_featured,
                tag_ids: dto.tag_ids,
                category_ids: dto.category_ids,
            },
            dto.translations
                .into_iter()
                .map(ArticleTranslationParams::from_dto)
                .collect(),
        )
    }
}

/// Columns an article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    PublishedAt,
    ViewCount,
}

impl ArticleSort {
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            None | Some("") | Some("created_at") => Ok(Self::CreatedAt),
            Some("updated_at") => Ok(Self::UpdatedAt),
            Some("published_at") => Ok(Self::PublishedAt),
            Some("view_count") => Ok(Self::ViewCount),
            Some(other) => Err(AppError::BadRequest(format!(
                "Unsupported sort field '{}'",
                other
            ))),
        }
    }

    pub fn column(self) -> entity::article::Column {
        match self {
            Self::CreatedAt => entity::article::Column::CreatedAt,
            Self::UpdatedAt => entity::article::Column::UpdatedAt,
            Self::PublishedAt => entity::article::Column::PublishedAt,
            Self::ViewCount => entity::article::Column::ViewCount,
        }
    }
}

/// Filters for paginated article listings.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    /// Keeps only articles translated into this language and loads only that
    /// language's translations.
    pub language: Option<String>,
    pub tag_id: Option<i32>,
    pub category_id: Option<i32>,
    pub sort: ArticleSort,
    pub direction: SortDirection,
}

/// Fixed-shape query over published articles ordered by `published_at` descending.
#[derive(Debug, Clone)]
pub struct PublishedQuery {
    pub featured_only: bool,
    pub category_slug: Option<String>,
    pub language: String,
    pub limit: u64,
}
