//! Tag factory creating a tag together with its translations.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    translations: Vec<(String, String, String)>,
}

impl<'a> TagFactory<'a> {
    /// Creates a factory with no translations.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            translations: Vec::new(),
        }
    }

    /// Adds a translation; the slug is `name` lowercased with spaces as hyphens.
    pub fn translation(mut self, language_code: &str, name: &str) -> Self {
        let slug = name.to_lowercase().replace(' ', "-");
        self.translations
            .push((language_code.to_string(), name.to_string(), slug));
        self
    }

    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        let now = Utc::now();
        let tag = entity::tag::ActiveModel {
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (language_code, name, slug) in self.translations {
            entity::tag_translation::ActiveModel {
                tag_id: ActiveValue::Set(tag.id),
                language_code: ActiveValue::Set(language_code),
                name: ActiveValue::Set(name),
                slug: ActiveValue::Set(slug),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(tag)
    }
}

/// Creates a tag with a unique English translation.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db)
        .translation("en", &format!("Tag {}", next_id()))
        .build()
        .await
}
