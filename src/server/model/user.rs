//! Account parameters and conversions.

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::error::AppError,
};

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            avatar: model.avatar,
            role: model.role,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Validated registration input.
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterParams {
    /// Requires a 3 to 50 character username, an email with a local part and a domain,
    /// and a password of at least 6 characters.
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let username = dto.username.trim().to_string();
        let email = dto.email.trim().to_lowercase();

        let username_len = username.chars().count();
        if !(3..=50).contains(&username_len) {
            return Err(AppError::BadRequest(
                "Username must be between 3 and 50 characters".to_string(),
            ));
        }

        if !is_plausible_email(&email) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }

        if dto.password.chars().count() < 6 {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        Ok(Self {
            username,
            email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        })
    }
}

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    }
}
