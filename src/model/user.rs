use chrono::{DateTime, Utc};
use entity::user::{UserRole, UserStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of an account. Never carries the password hash.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    #[schema(value_type = String, example = "editor")]
    pub role: UserRole,
    #[schema(value_type = String, example = "active")]
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub user: UserDto,
}
