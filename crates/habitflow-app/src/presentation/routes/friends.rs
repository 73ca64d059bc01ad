use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::friend_commands::*;
use crate::application::dtos::{FriendListDto, HabitListDto};
use crate::presentation::error::ApiError;
use crate::presentation::extract::ApiJson;
use crate::presentation::state::AppState;

pub(super) fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/friends/add", post(add_friend))
        .route("/friends/{user_id}", get(list_friends))
        .route("/friends/{user_id}/habits/{friend_id}", get(friend_habits))
        .route("/friends/{user_id}/remove/{friend_id}", delete(remove_friend))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddFriendRequest {
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    share_code: String,
}

async fn add_friend(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<AddFriendRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.user_id.trim().is_empty() || body.share_code.trim().is_empty() {
        return Err(ApiError::validation("userId and shareCode are required"));
    }

    let friend = state
        .command_handlers
        .add_friend
        .handle(AddFriendCommand {
            user_id: body.user_id,
            share_code: body.share_code,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Friend added", "friend": friend })),
    ))
}

async fn list_friends(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<FriendListDto>, ApiError> {
    Ok(Json(state.queries.friend.list_friends(&user_id).await?))
}

async fn friend_habits(
    State(state): State<Arc<AppState>>,
    Path((user_id, friend_id)): Path<(String, String)>,
) -> Result<Json<HabitListDto>, ApiError> {
    Ok(Json(
        state
            .queries
            .friend
            .friend_habits(&user_id, &friend_id)
            .await?,
    ))
}

async fn remove_friend(
    State(state): State<Arc<AppState>>,
    Path((user_id, friend_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .command_handlers
        .remove_friend
        .handle(RemoveFriendCommand { user_id, friend_id })
        .await?;

    if !result.removed {
        return Err(ApiError::not_found("Friend not found in your list"));
    }

    Ok(Json(json!({ "message": "Friend removed" })))
}
