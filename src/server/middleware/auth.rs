use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::user::{UserRole, UserStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    util::jwt::TokenIssuer,
};

pub enum Permission {
    /// Only admins.
    Admin,
    /// Editors and admins.
    Editor,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenIssuer,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenIssuer, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Verifies the bearer token and checks every permission against its role claim.
    ///
    /// An empty permission list only requires a valid token for an active account.
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = user_repo.find_by_id(claims.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.user_id).into());
        };

        if user.status != UserStatus::Active {
            return Err(AuthError::AccessDenied(
                user.id,
                "Disabled user presented a valid token".to_string(),
            )
            .into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if claims.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only action without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Editor => {
                    if !matches!(claims.role, UserRole::Admin | UserRole::Editor) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an editor action without the editor or admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
