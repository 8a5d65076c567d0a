//! Image factory for registering stored files.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    usage: Option<String>,
}

impl<'a> ImageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            usage: None,
        }
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        let now = Utc::now();
        let id = next_id();
        entity::image::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            file_name: ActiveValue::Set(format!("image{}.png", id)),
            file_path: ActiveValue::Set(format!("2026/01/01/image{}.png", id)),
            file_size: ActiveValue::Set(1024),
            width: ActiveValue::Set(None),
            height: ActiveValue::Set(None),
            content_type: ActiveValue::Set("image/png".to_string()),
            alt: ActiveValue::Set(None),
            title: ActiveValue::Set(None),
            usage: ActiveValue::Set(self.usage),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image owned by `user_id` with no usage tag.
pub async fn create_image(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db, user_id).build().await
}
