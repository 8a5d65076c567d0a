//! HTTP backend of the multilingual content service.
//!
//! The backend uses Axum as the web framework and SeaORM for database access. Articles,
//! tags, categories and settings carry one translation row per language; the language
//! registry decides which language codes are valid.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transaction boundaries
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities
//! - **Model Layer** (`model/`) - Domain bundles and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token issuer, upload store)
//! - **Startup** (`startup`) - Database connection, migrations and language seeding
//! - **Router** (`router`) - Route table, static uploads and Swagger UI
//! - **Doc** (`doc`) - OpenAPI document
//! - **Util** (`util`) - Slugs, password hashing and tokens
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** authenticates through `AuthGuard`, converts DTOs to params, calls a service
//! 3. **Service** validates, opens a transaction for writes and calls repositories
//! 4. **Data** queries the database and returns entity bundles
//! 5. **Controller** converts the result to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
