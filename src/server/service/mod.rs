//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the upload store
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Every multi-step write commits or rolls back as a whole
//!
//! Articles, tags, categories and settings share their write path through
//! `translatable::TranslatableService`.

pub mod article;
pub mod auth;
pub mod category;
pub mod image;
pub mod language;
pub mod search;
pub mod setting;
pub mod tag;
pub mod translatable;
pub mod upload;
