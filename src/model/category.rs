use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CategoryTranslationDto {
    pub language_code: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub translations: Vec<CategoryTranslationDto>,
    /// Present only when the listing asked for parents to be embedded.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(no_recursion)]
    pub parent: Option<Box<CategoryDto>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Translation input; a blank or missing slug is derived from `name`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CategoryTranslationInputDto {
    pub language_code: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub description: Option<String>,
}

/// Create or update body. On update `parent_id` replaces the current parent, so
/// omitting it moves the category to the top level.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SaveCategoryDto {
    pub parent_id: Option<i32>,
    pub translations: Vec<CategoryTranslationInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedCategoriesDto {
    pub categories: Vec<CategoryDto>,
    pub pagination: PaginationDto,
}
