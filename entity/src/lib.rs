//! SeaORM entity definitions for the content store.
//!
//! Translatable records (articles, tags, categories, settings) are split into a
//! language-independent base table and a per-language translation table keyed by
//! `(owner_id, language_code)`. Base tables carry a `deleted_at` tombstone; translation
//! and join tables are always hard-deleted.

pub mod prelude;

pub mod article;
pub mod article_category;
pub mod article_tag;
pub mod article_translation;
pub mod category;
pub mod category_translation;
pub mod image;
pub mod language;
pub mod setting;
pub mod setting_translation;
pub mod tag;
pub mod tag_translation;
pub mod user;
