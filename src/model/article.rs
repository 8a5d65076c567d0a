use chrono::{DateTime, Utc};
use entity::article::ArticleStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::PaginationDto, category::CategoryDto, tag::TagDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ArticleTranslationDto {
    pub language_code: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub author: Option<AuthorDto>,
    #[schema(value_type = String, example = "published")]
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub view_count: i64,
    pub is_featured: bool,
    pub translations: Vec<ArticleTranslationDto>,
    pub tags: Vec<TagDto>,
    pub categories: Vec<CategoryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Translation input; a blank or missing slug is derived from `title`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ArticleTranslationInputDto {
    pub language_code: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateArticleDto {
    #[schema(value_type = Option<String>, example = "draft")]
    pub status: Option<ArticleStatus>,
    pub featured_image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub translations: Vec<ArticleTranslationInputDto>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

/// Partial update. Omitted base fields keep their value, omitted translations are left
/// untouched and omitted `tag_ids`/`category_ids` keep the current links.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateArticleDto {
    #[schema(value_type = Option<String>, example = "published")]
    pub status: Option<ArticleStatus>,
    pub featured_image: Option<String>,
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub translations: Vec<ArticleTranslationInputDto>,
    pub tag_ids: Option<Vec<i32>>,
    pub category_ids: Option<Vec<i32>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedArticlesDto {
    pub articles: Vec<ArticleDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
}
