use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UploadError {
    /// Multipart body did not contain a `file` field.
    #[error("No file was provided")]
    MissingFile,

    /// Multipart body could not be read.
    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    /// File exceeds the configured size limit.
    #[error("File is too large ({size} bytes, limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    /// File extension is not an accepted image type.
    #[error("Unsupported file type '{0}'")]
    UnsupportedType(String),

    /// Writing the file to storage failed.
    #[error("Failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Maps validation failures to 400 and storage failures to 500.
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::Io(err) => {
                tracing::error!("Failed to store upload: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
