use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ImageDto {
    pub id: i32,
    pub user_id: i32,
    pub file_name: String,
    pub file_path: String,
    pub url: String,
    pub file_size: i64,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub content_type: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub usage: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Metadata update; omitted fields keep their value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateImageDto {
    pub title: Option<String>,
    pub alt: Option<String>,
    pub usage: Option<String>,
}

/// Multipart body accepted by the upload endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    #[schema(content_media_type = "application/octet-stream")]
    pub file: String,
    pub usage: Option<String>,
    pub alt: Option<String>,
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedImagesDto {
    pub images: Vec<ImageDto>,
    pub pagination: PaginationDto,
}
