//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Entity bundles are assembled at the
//! repository boundary and transformed to DTOs at the controller boundary.

pub mod article;
pub mod category;
pub mod image;
pub mod language;
pub mod pagination;
pub mod search;
pub mod setting;
pub mod tag;
pub mod translation;
pub mod user;
