use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{LoginParams, RegisterParams},
    service::auth::AuthService,
    util::{jwt::TokenIssuer, password::hash_password},
};
use entity::user::{UserRole, UserStatus};
use test_utils::{builder::TestBuilder, factory};

mod login;

fn issuer() -> TokenIssuer {
    TokenIssuer::new("test-secret", "babelpress-test")
}

fn registration(username: &str, email: &str) -> RegisterParams {
    RegisterParams {
        username: username.to_string(),
        email: email.to_string(),
        password: "correct horse battery".to_string(),
        first_name: None,
        last_name: None,
    }
}

fn login(email: &str, password: &str) -> LoginParams {
    LoginParams {
        email: email.to_string(),
        password: password.to_string(),
    }
}
