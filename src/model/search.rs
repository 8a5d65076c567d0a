use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

/// Denormalized search hit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SearchResultDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub language_code: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub category_name: Option<String>,
    pub author_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SearchResponseDto {
    pub query: String,
    pub results: Vec<SearchResultDto>,
    pub pagination: PaginationDto,
    /// Present when the query matched fewer than three articles.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suggestions: Vec<String>,
}
