use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TagTranslationDto {
    pub language_code: String,
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub translations: Vec<TagTranslationDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Translation input; a blank or missing slug is derived from `name`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TagTranslationInputDto {
    pub language_code: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SaveTagDto {
    pub translations: Vec<TagTranslationInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedTagsDto {
    pub tags: Vec<TagDto>,
    pub pagination: PaginationDto,
}
