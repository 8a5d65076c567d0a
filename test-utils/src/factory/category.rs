//! Category factory creating a category together with its translations.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    parent_id: Option<i32>,
    translations: Vec<(String, String, String)>,
}

impl<'a> CategoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            parent_id: None,
            translations: Vec::new(),
        }
    }

    pub fn parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Adds a translation; the slug is `name` lowercased with spaces as hyphens.
    pub fn translation(mut self, language_code: &str, name: &str) -> Self {
        let slug = name.to_lowercase().replace(' ', "-");
        self.translations
            .push((language_code.to_string(), name.to_string(), slug));
        self
    }

    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let now = Utc::now();
        let category = entity::category::ActiveModel {
            parent_id: ActiveValue::Set(self.parent_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (language_code, name, slug) in self.translations {
            entity::category_translation::ActiveModel {
                category_id: ActiveValue::Set(category.id),
                language_code: ActiveValue::Set(language_code),
                name: ActiveValue::Set(name),
                slug: ActiveValue::Set(slug),
                description: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(category)
    }
}

/// Creates a top-level category with a unique English translation.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db)
        .translation("en", &format!("Category {}", next_id()))
        .build()
        .await
}
