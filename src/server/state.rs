//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It carries the database handle, the token
//! issuer used to sign and verify bearer tokens, and the upload collaborator that
//! stores image files.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{service::upload::UploadStore, util::jwt::TokenIssuer};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenIssuer` holds its keys behind an `Arc`
/// - `Arc<dyn UploadStore>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies bearer tokens.
    pub tokens: TokenIssuer,

    /// Stores uploaded image files and reports their location.
    pub uploads: Arc<dyn UploadStore>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenIssuer, uploads: Arc<dyn UploadStore>) -> Self {
        Self {
            db,
            tokens,
            uploads,
        }
    }
}
