//! Article factory creating an article together with its translations.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::article::ArticleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

struct TranslationSeed {
    language_code: String,
    title: String,
    slug: String,
    content: String,
}

/// Factory for creating test articles.
///
/// Defaults to a draft article with no translations.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    status: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
    is_featured: bool,
    translations: Vec<TranslationSeed>,
}

impl<'a> ArticleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            status: ArticleStatus::Draft,
            published_at: None,
            is_featured: false,
            translations: Vec::new(),
        }
    }

    /// Marks the article published now.
    pub fn published(self) -> Self {
        self.published_at(Utc::now())
    }

    /// Marks the article published at the given instant.
    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(at);
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Adds a translation whose content repeats the title.
    pub fn translation(self, language_code: &str, title: &str) -> Self {
        let content = format!("{} body", title);
        self.translation_with_content(language_code, title, &content)
    }

    pub fn translation_with_content(
        mut self,
        language_code: &str,
        title: &str,
        content: &str,
    ) -> Self {
        self.translations.push(TranslationSeed {
            language_code: language_code.to_string(),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            content: content.to_string(),
        });
        self
    }

    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();
        let article = entity::article::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            published_at: ActiveValue::Set(self.published_at),
            featured_image: ActiveValue::Set(None),
            view_count: ActiveValue::Set(0),
            is_featured: ActiveValue::Set(self.is_featured),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for seed in self.translations {
            entity::article_translation::ActiveModel {
                article_id: ActiveValue::Set(article.id),
                language_code: ActiveValue::Set(seed.language_code),
                title: ActiveValue::Set(seed.title),
                slug: ActiveValue::Set(seed.slug),
                excerpt: ActiveValue::Set(None),
                content: ActiveValue::Set(seed.content),
                meta_title: ActiveValue::Set(None),
                meta_description: ActiveValue::Set(None),
                meta_keywords: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(article)
    }
}

/// Creates a draft article with a unique English translation.
pub async fn create_article(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, user_id)
        .translation("en", &format!("Article {}", next_id()))
        .build()
        .await
}
