use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        image::{ImageDto, PaginatedImagesDto, UpdateImageDto, UploadImageForm},
    },
    server::{
        error::{upload::UploadError, AppError},
        middleware::auth::AuthGuard,
        model::{
            image::{ImageFilter, UpdateImageParams, UploadMetadata},
            pagination::{PageRequest, SortDirection},
        },
        service::image::{ImageService, IMAGE_PAGE_SIZE},
        state::AppState,
    },
};

/// Tag for grouping image endpoints in OpenAPI documentation
pub static IMAGE_TAG: &str = "image";

#[derive(Deserialize, IntoParams)]
pub struct ImageListQuery {
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 20)
    pub page_size: Option<i64>,
    /// Only images registered for this usage
    pub usage: Option<String>,
    /// Only images uploaded by this user
    pub user_id: Option<i32>,
    /// `asc` or `desc` by upload time (default: desc)
    pub order: Option<String>,
}

/// Fields collected from the multipart upload body.
#[derive(Default)]
struct UploadForm {
    file: Option<(String, Vec<u8>)>,
    usage: Option<String>,
    alt: Option<String>,
    title: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, UploadError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| UploadError::Multipart(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| UploadError::Multipart(e.to_string()))?;
                    form.file = Some((file_name, bytes.to_vec()));
                }
                "usage" | "alt" | "title" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| UploadError::Multipart(e.to_string()))?;
                    let value = Some(value.trim().to_string()).filter(|v| !v.is_empty());
                    match name.as_str() {
                        "usage" => form.usage = value,
                        "alt" => form.alt = value,
                        _ => form.title = value,
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// List images.
#[utoipa::path(
    get,
    path = "/api/v1/images",
    tag = IMAGE_TAG,
    params(ImageListQuery),
    responses(
        (status = 200, description = "Page of images", body = PaginatedImagesDto),
        (status = 400, description = "Invalid sort direction", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_images(
    State(state): State<AppState>,
    Query(query): Query<ImageListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let direction = SortDirection::parse(query.order.as_deref())?;
    let page = PageRequest::new(query.page, query.page_size, IMAGE_PAGE_SIZE);
    let filter = ImageFilter {
        usage: query.usage,
        user_id: query.user_id,
    };

    let images = ImageService::new(&state.db)
        .get_paginated(filter, direction, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedImagesDto {
            pagination: images.pagination_dto(),
            images: images.items.into_iter().map(ImageDto::from).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/images/{id}",
    tag = IMAGE_TAG,
    params(("id" = i32, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image", body = ImageDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_image_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let image = ImageService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ImageDto::from(image))))
}

/// Upload an image.
///
/// Accepts a multipart body with a `file` part and optional `usage`, `alt` and
/// `title` parts. The file is stored under `/uploads` and registered to the caller.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `201 Created` - Registered image
/// - `400 Bad Request` - Missing file, unsupported type or file too large
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/v1/images",
    tag = IMAGE_TAG,
    security(("bearer" = [])),
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image uploaded", body = ImageDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let form = UploadForm::read(multipart).await?;
    let Some((file_name, bytes)) = form.file else {
        return Err(UploadError::MissingFile.into());
    };

    let metadata = UploadMetadata {
        alt: form.alt,
        title: form.title,
        usage: form.usage,
    };
    let image = ImageService::new(&state.db)
        .upload(state.uploads.as_ref(), user.id, &file_name, &bytes, metadata)
        .await?;

    tracing::info!("User {} uploaded image {}", user.id, image.id);

    Ok((StatusCode::CREATED, Json(ImageDto::from(image))))
}

/// Update image metadata.
///
/// # Access Control
/// - The uploader or an admin
#[utoipa::path(
    put,
    path = "/api/v1/images/{id}",
    tag = IMAGE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Image ID")),
    request_body = UpdateImageDto,
    responses(
        (status = 200, description = "Image updated", body = ImageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner or an admin", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let image = ImageService::new(&state.db)
        .update(id, &user, UpdateImageParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ImageDto::from(image))))
}

/// Delete an image record. The stored file is kept.
///
/// # Access Control
/// - The uploader or an admin
#[utoipa::path(
    delete,
    path = "/api/v1/images/{id}",
    tag = IMAGE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Image ID")),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner or an admin", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ImageService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
