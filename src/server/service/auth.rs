use entity::user::UserStatus;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{LoginParams, RegisterParams},
    util::{
        jwt::TokenIssuer,
        password::{spawn_hash_password, spawn_verify_password},
    },
};

/// Service for account registration and password login.
///
/// Registration stores only an Argon2 hash of the password. Login answers every kind of
/// failure with the same `InvalidCredentials` error so callers cannot probe which
/// emails exist.
pub struct AuthService<'a> {
    /// Database connection for account operations.
    db: &'a DatabaseConnection,
    /// Signs the bearer token handed out on login.
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Reference to the token issuer
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenIssuer) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account with the `user` role.
    ///
    /// # Arguments
    /// - `params` - Validated registration fields
    ///
    /// # Returns
    /// - `Ok(Model)` - The created account
    /// - `Err(AppError::Conflict)` - Username or email is already taken
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterParams) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.username_exists(&params.username).await? {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = spawn_hash_password(params.password.clone()).await?;

        let user = repo
            .create(params, password_hash)
            .await
            .map_err(unique_violation_as_conflict)?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Checks credentials and issues a 24 hour bearer token.
    ///
    /// # Arguments
    /// - `params` - Email and plaintext password
    ///
    /// # Returns
    /// - `Ok((token, user))` - Signed token and the authenticated account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email, wrong password or
    ///   inactive account
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(
        &self,
        params: LoginParams,
    ) -> Result<(String, entity::user::Model), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials("unknown email".to_string()).into());
        };

        if !spawn_verify_password(params.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials(format!(
                "password mismatch for user {}",
                user.id
            ))
            .into());
        }

        if user.status != UserStatus::Active {
            return Err(AuthError::InvalidCredentials(format!(
                "user {} is not active",
                user.id
            ))
            .into());
        }

        let token = self.tokens.issue(user.id, user.role)?;

        Ok((token, user))
    }
}

/// Two registrations racing past the existence checks surface as a unique violation.
fn unique_violation_as_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Username or email is already taken".to_string())
        }
        _ => AppError::DbErr(err),
    }
}
