//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! account creation and lookups by ID, email and username. Password hashing happens in
//! the service layer; this repository only ever sees the finished hash.

use chrono::Utc;
use entity::user::{UserRole, UserStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::RegisterParams;

/// Repository providing database operations for account management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an account with the `user` role and `active` status.
    ///
    /// # Arguments
    /// - `params` - Validated registration fields
    /// - `password_hash` - Salted hash of the password in PHC string format
    ///
    /// # Returns
    /// - `Ok(Model)` - The created account
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(
        &self,
        params: RegisterParams,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            avatar: ActiveValue::Set(None),
            role: ActiveValue::Set(UserRole::User),
            status: ActiveValue::Set(UserStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a live account by ID.
    ///
    /// # Arguments
    /// - `id` - Account ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account found
    /// - `Ok(None)` - No account with that ID, or it was tombstoned
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Finds a live account by email.
    ///
    /// # Arguments
    /// - `email` - Lowercased email address
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account found
    /// - `Ok(None)` - No live account uses that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Checks whether any account, live or tombstoned, already uses the username.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any account, live or tombstoned, already uses the email.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
