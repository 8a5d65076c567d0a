use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Pagination block attached to every paginated list response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginationDto {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_page: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct GenerateSlugDto {
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct SlugDto {
    pub slug: String,
}
