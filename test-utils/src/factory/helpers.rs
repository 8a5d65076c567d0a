//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links an article to a tag through the join table.
pub async fn link_tag(db: &DatabaseConnection, article_id: i32, tag_id: i32) -> Result<(), DbErr> {
    entity::article_tag::ActiveModel {
        article_id: ActiveValue::Set(article_id),
        tag_id: ActiveValue::Set(tag_id),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Links an article to a category through the join table.
pub async fn link_category(
    db: &DatabaseConnection,
    article_id: i32,
    category_id: i32,
) -> Result<(), DbErr> {
    entity::article_category::ActiveModel {
        article_id: ActiveValue::Set(article_id),
        category_id: ActiveValue::Set(category_id),
    }
    .insert(db)
    .await?;
    Ok(())
}
