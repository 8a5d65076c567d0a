//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity bundles (an entity together with its translations and relations) to the service
//! layer. Every repository is generic over `ConnectionTrait`, so the same code runs against
//! the connection pool for reads and against an open `DatabaseTransaction` for writes.

pub mod article;
pub mod category;
pub mod image;
pub mod language;
pub mod search;
pub mod setting;
pub mod tag;
pub mod user;
