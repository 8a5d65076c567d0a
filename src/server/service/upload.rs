//! Storage collaborator for uploaded image files.
//!
//! The service layer only ever persists the reference returned from `UploadStore::store`;
//! where and how the bytes live is up to the implementation.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::server::error::upload::UploadError;

/// Accepted image extensions and their content types.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
];

/// Location and validated metadata of a stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Original file name as sent by the client.
    pub file_name: String,
    /// Path relative to the storage root, using `/` separators.
    pub file_path: String,
    pub file_size: u64,
    pub content_type: String,
}

#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Validates and stores one file.
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<StoredFile, UploadError>;

    /// Removes a file previously returned by `store`.
    async fn remove(&self, file_path: &str) -> Result<(), UploadError>;
}

/// Writes uploads below a local directory as `YYYY/MM/DD/<uuid>.<ext>`.
pub struct LocalUploadStore {
    root: PathBuf,
    max_size: u64,
}

impl LocalUploadStore {
    pub fn new(root: impl Into<PathBuf>, max_size: u64) -> Self {
        Self {
            root: root.into(),
            max_size,
        }
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<StoredFile, UploadError> {
        let size = bytes.len() as u64;
        if size > self.max_size {
            return Err(UploadError::TooLarge {
                size,
                limit: self.max_size,
            });
        }

        let (extension, content_type) = content_type_for(file_name)?;

        let now = Utc::now();
        let directory = format!("{:04}/{:02}/{:02}", now.year(), now.month(), now.day());
        let file_path = format!("{}/{}.{}", directory, Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(self.root.join(&directory)).await?;
        tokio::fs::write(self.root.join(&file_path), bytes).await?;

        tracing::debug!("Stored upload {} as {}", file_name, file_path);

        Ok(StoredFile {
            file_name: file_name.to_string(),
            file_path,
            file_size: size,
            content_type: content_type.to_string(),
        })
    }

    async fn remove(&self, file_path: &str) -> Result<(), UploadError> {
        tokio::fs::remove_file(self.root.join(file_path)).await?;

        tracing::debug!("Removed upload {}", file_path);

        Ok(())
    }
}

/// Returns the lowercased extension and content type for an accepted file name.
fn content_type_for(file_name: &str) -> Result<(String, &'static str), UploadError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    ALLOWED_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| (extension.clone(), *content_type))
        .ok_or(UploadError::UnsupportedType(extension))
}
