use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::dtos::UserDto;
use crate::presentation::error::ApiError;
use crate::presentation::extract::ApiJson;
use crate::presentation::state::AppState;

pub(super) fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/user/{user_id}/password", put(change_password))
        .route("/auth/user/{user_id}", delete(delete_user))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    #[serde(default)]
    current_password: String,
    #[serde(default)]
    new_password: String,
}

#[derive(Debug, Deserialize)]
struct DeleteUserRequest {
    #[serde(default)]
    password: String,
}

async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = state
        .command_handlers
        .register_user
        .handle(RegisterUserCommand {
            username: body.username,
            password: body.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CredentialsRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .command_handlers
        .login
        .handle(LoginCommand {
            username: body.username,
            password: body.password,
        })
        .await?;

    Ok(Json(user))
}

async fn change_password(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<ChangePasswordRequest>,
) -> Result<Json<Value>, ApiError> {
    state
        .command_handlers
        .change_password
        .handle(ChangePasswordCommand {
            user_id,
            current_password: body.current_password,
            new_password: body.new_password,
        })
        .await?;

    Ok(Json(json!({ "message": "Password updated" })))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<DeleteUserRequest>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .command_handlers
        .delete_user
        .handle(DeleteUserCommand {
            user_id,
            password: body.password,
        })
        .await?;

    Ok(Json(json!({
        "message": "Account deleted",
        "habitsRemoved": result.habits_removed,
    })))
}
