//! Image registry parameters.

use crate::model::image::{ImageDto, UpdateImageDto};

/// Public path under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

impl From<entity::image::Model> for ImageDto {
    fn from(model: entity::image::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            url: format!("{}/{}", UPLOADS_URL_PREFIX, model.file_path),
            file_name: model.file_name,
            file_path: model.file_path,
            file_size: model.file_size,
            width: model.width,
            height: model.height,
            content_type: model.content_type,
            alt: model.alt,
            title: model.title,
            usage: model.usage,
            created_at: model.created_at,
        }
    }
}

/// Row to register after the upload collaborator stored a file.
#[derive(Debug, Clone)]
pub struct NewImageParams {
    pub user_id: i32,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub content_type: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub usage: Option<String>,
}

/// Caller-supplied fields sent alongside an uploaded file.
#[derive(Debug, Clone, Default)]
pub struct UploadMetadata {
    pub alt: Option<String>,
    pub title: Option<String>,
    pub usage: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateImageParams {
    pub title: Option<String>,
    pub alt: Option<String>,
    pub usage: Option<String>,
}

impl UpdateImageParams {
    pub fn from_dto(dto: UpdateImageDto) -> Self {
        Self {
            title: dto.title,
            alt: dto.alt,
            usage: dto.usage,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageFilter {
    pub usage: Option<String>,
    pub user_id: Option<i32>,
}
