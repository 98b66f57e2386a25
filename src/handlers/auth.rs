use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use tracing::info;

use crate::database::users::{find_user_by_email, insert_user};
use crate::models::user::{NewUser, SignInRequest, UserDraft, UserResponse};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<UserDraft>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(draft) = payload?;
    let new_user = draft.into_new_user()?;

    let password = hash_password(new_user.password).await?;
    let user = insert_user(
        &state.db,
        NewUser {
            password,
            ..new_user
        },
    )
    .await?;

    info!(user_id = %user.id, "User signed up");
    Ok(created(UserResponse::from(&user), "User created successfully"))
}

pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let credentials = request.into_credentials()?;

    let user = find_user_by_email(&state.db, &credentials.email)
        .await?
        .ok_or_else(|| AppError::AuthError(INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(credentials.password, user.password.clone()).await? {
        return Err(AppError::AuthError(INVALID_CREDENTIALS.to_string()));
    }

    info!(user_id = %user.id, "User signed in");
    Ok(success(UserResponse::from(&user), "User signed in successfully"))
}

async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}
