//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Translatable entities are created together with one
//! translation so they are immediately visible to listing and lookup queries.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let en = factory::create_language(&db, "en").await?;
//!     let user = factory::create_user(&db).await?;
//!     let article = factory::create_article(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let article = factory::article::ArticleFactory::new(&db, user.id)
//!     .published()
//!     .translation("en", "Climate report")
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod category;
pub mod helpers;
pub mod image;
pub mod language;
pub mod tag;
pub mod user;

pub use article::create_article;
pub use category::create_category;
pub use image::create_image;
pub use language::{create_default_language, create_language};
pub use tag::create_tag;
pub use user::create_user;
