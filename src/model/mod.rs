//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod article;
pub mod category;
pub mod image;
pub mod language;
pub mod search;
pub mod setting;
pub mod tag;
pub mod user;
