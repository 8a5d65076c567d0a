use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, TokenDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates an active account with the `user` role. Usernames must be 3 to 50
/// characters, passwords at least 6 and the email must look like an address.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration fields
///
/// # Returns
/// - `201 Created` - The created account
/// - `400 Bad Request` - Invalid username, email or password
/// - `409 Conflict` - Username or email already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let user = AuthService::new(&state.db, &state.tokens)
        .register(params)
        .await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Log in with email and password.
///
/// Returns a bearer token valid for 24 hours together with the account. Unknown
/// emails, wrong passwords and disabled accounts all produce the same 401 response.
///
/// # Returns
/// - `200 OK` - Token and account
/// - `401 Unauthorized` - Invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .login(LoginParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            user: user.into(),
        }),
    ))
}
