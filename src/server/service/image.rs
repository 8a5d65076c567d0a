use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::image::ImageRepository,
    error::{auth::AuthError, AppError},
    model::{
        image::{ImageFilter, NewImageParams, UpdateImageParams, UploadMetadata},
        pagination::{Page, PageRequest, SortDirection},
    },
    service::upload::UploadStore,
};

/// Default page size for image listings.
pub const IMAGE_PAGE_SIZE: u64 = 20;

pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a file the upload store has already written
    pub async fn create(&self, params: NewImageParams) -> Result<entity::image::Model, AppError> {
        Ok(ImageRepository::new(self.db).create(params).await?)
    }

    /// Stores an uploaded file and registers it to `user_id`
    ///
    /// When registration fails the stored file is removed again.
    pub async fn upload(
        &self,
        store: &dyn UploadStore,
        user_id: i32,
        file_name: &str,
        bytes: &[u8],
        metadata: UploadMetadata,
    ) -> Result<entity::image::Model, AppError> {
        let stored = store.store(file_name, bytes).await?;
        let file_path = stored.file_path.clone();

        let result = self
            .create(NewImageParams {
                user_id,
                file_name: stored.file_name,
                file_path: stored.file_path,
                file_size: stored.file_size as i64,
                content_type: stored.content_type,
                alt: metadata.alt,
                title: metadata.title,
                usage: metadata.usage,
            })
            .await;

        if result.is_err() {
            if let Err(err) = store.remove(&file_path).await {
                tracing::warn!("Failed to remove orphaned upload {}: {}", file_path, err);
            }
        }

        result
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::image::Model, AppError> {
        ImageRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Image {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        filter: ImageFilter,
        direction: SortDirection,
        page: PageRequest,
    ) -> Result<Page<entity::image::Model>, AppError> {
        let (images, total) = ImageRepository::new(self.db)
            .get_paginated(&filter, direction, page)
            .await?;

        Ok(Page::new(images, total, page))
    }

    /// Updates image metadata on behalf of its owner or an admin
    pub async fn update(
        &self,
        id: i32,
        actor: &entity::user::Model,
        params: UpdateImageParams,
    ) -> Result<entity::image::Model, AppError> {
        let image = self.get_by_id(id).await?;
        require_owner_or_admin(&image, actor)?;

        Ok(ImageRepository::new(self.db).update(image, params).await?)
    }

    /// Tombstones an image on behalf of its owner or an admin
    ///
    /// The stored file is kept.
    pub async fn delete(&self, id: i32, actor: &entity::user::Model) -> Result<(), AppError> {
        let image = self.get_by_id(id).await?;
        require_owner_or_admin(&image, actor)?;

        ImageRepository::new(self.db).tombstone(id).await?;

        Ok(())
    }
}

fn require_owner_or_admin(
    image: &entity::image::Model,
    actor: &entity::user::Model,
) -> Result<(), AppError> {
    if image.user_id == actor.id || actor.role == UserRole::Admin {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        actor.id,
        format!("User attempted to modify image {} owned by another user", image.id),
    )
    .into())
}
