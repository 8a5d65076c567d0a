//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard` where required, converts request
//! DTOs into server parameters, calls one service and converts the result back into
//! response DTOs.

pub mod article;
pub mod auth;
pub mod category;
pub mod image;
pub mod language;
pub mod search;
pub mod setting;
pub mod tag;
pub mod user;
pub mod util;
