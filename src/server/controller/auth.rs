use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataDto, EmptyDto, ErrorDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterUserParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account and log it in.
///
/// # Returns
/// - `201 Created` - The new user; the response sets the session cookie
/// - `400 Bad Request` - Invalid input or e-mail already registered
/// - `500 Internal Server Error` - Database or session store error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered", body = DataDto<UserDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let params = RegisterUserParams::from_dto(payload)?;
    let user = auth_service.register(params).await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(user.into_dto()))))
}

/// Log in with e-mail and password.
///
/// # Returns
/// - `200 OK` - The user; the session id is cycled and the cookie re-issued
/// - `400 Bad Request` - E-mail or password missing
/// - `401 Unauthorized` - Invalid credentials
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = DataDto<UserDto>),
        (status = 400, description = "E-mail or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Please provide an email and password".to_string(),
        ));
    }

    let auth_service = AuthService::new(&state.db);
    let user = auth_service
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(user.into_dto()))))
}

/// Get the logged-in user.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully retrieved user", body = DataDto<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(DataDto::new(user.into_dto()))))
}

/// Log out by clearing the session.
#[utoipa::path(
    get,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = DataDto<EmptyDto>)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(DataDto::new(EmptyDto::default()))))
}
