//! Language factory for seeding the language registry.

use chrono::Utc;
use entity::language::TextDirection;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct LanguageFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    is_active: bool,
    is_default: bool,
    sort_order: i32,
}

impl<'a> LanguageFactory<'a> {
    /// Creates an active, non-default language with `code` as both code and name.
    pub fn new(db: &'a DatabaseConnection, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            db,
            name: code.clone(),
            code,
            is_active: true,
            is_default: false,
            sort_order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn default_language(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::language::Model, DbErr> {
        let now = Utc::now();
        entity::language::ActiveModel {
            code: ActiveValue::Set(self.code),
            native_name: ActiveValue::Set(self.name.clone()),
            name: ActiveValue::Set(self.name),
            is_active: ActiveValue::Set(self.is_active),
            is_default: ActiveValue::Set(self.is_default),
            direction: ActiveValue::Set(TextDirection::Ltr),
            sort_order: ActiveValue::Set(self.sort_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, non-default language.
pub async fn create_language(
    db: &DatabaseConnection,
    code: &str,
) -> Result<entity::language::Model, DbErr> {
    LanguageFactory::new(db, code).build().await
}

/// Creates an active language flagged as the registry default.
pub async fn create_default_language(
    db: &DatabaseConnection,
    code: &str,
) -> Result<entity::language::Model, DbErr> {
    LanguageFactory::new(db, code)
        .default_language(true)
        .build()
        .await
}
