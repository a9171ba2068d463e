//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use screenlog_core::error::CoreError;
use screenlog_core::roles::Role;
use screenlog_core::validation::{validate_email, validate_name, validate_password};
use screenlog_db::models::user::{CreateUser, User, UserResponse};
use screenlog_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::MessageDataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload returned by both register and login.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub user: UserResponse,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /auth/register` -- create an account and issue a token.
///
/// The email is lowercased before storage so lookups are case-insensitive.
/// Duplicates are rejected with a pre-check; the unique index on the email
/// column backstops the concurrent-registration race, and both paths
/// surface the same 400 message.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageDataResponse<AuthPayload>>)> {
    let mut errors = Vec::new();
    errors.extend(validate_name(&input.name).err());
    errors.extend(validate_email(&input.email).err());
    errors.extend(validate_password(&input.password).err());
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors).into());
    }

    let email = input.email.trim().to_lowercase();

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(CoreError::Conflict("User already exists".into()).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name.trim().to_string(),
            email,
            password_hash,
            role: Role::User,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let payload = auth_payload(&state, user)?;
    Ok((
        StatusCode::CREATED,
        Json(MessageDataResponse::new("User registered successfully", payload)),
    ))
}

/// `POST /auth/login` -- verify credentials and issue a token.
///
/// Unknown email and wrong password return the identical 401 message so the
/// response does not reveal which one failed.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<MessageDataResponse<AuthPayload>>> {
    let mut errors = Vec::new();
    errors.extend(validate_email(&input.email).err());
    errors.extend(validate_password(&input.password).err());
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors).into());
    }

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Incorrect email or password".into()))?;

    let valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !valid {
        return Err(CoreError::Unauthorized("Incorrect email or password".into()).into());
    }

    tracing::info!(user_id = user.id, "User logged in");

    let payload = auth_payload(&state, user)?;
    Ok(Json(MessageDataResponse::new("Login successful", payload)))
}

fn auth_payload(state: &AppState, user: User) -> Result<AuthPayload, AppError> {
    let token = generate_access_token(user.id, user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;
    Ok(AuthPayload {
        user: user.to_response(),
        token,
    })
}
