use axum::{
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use entity::user::{UserRole, UserStatus};
use sea_orm::DbErr;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    util::jwt::TokenIssuer,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn issuer() -> TokenIssuer {
    TokenIssuer::new("test-secret", "babelpress-test")
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

async fn user_with_role(
    db: &sea_orm::DatabaseConnection,
    role: UserRole,
) -> Result<entity::user::Model, DbErr> {
    factory::user::UserFactory::new(db).role(role).build().await
}
