use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::journal_commands::*;
use crate::application::dtos::{JournalDayDto, JournalEntryDto, JournalListDto};
use crate::presentation::error::ApiError;
use crate::presentation::extract::ApiJson;
use crate::presentation::state::AppState;
use habitflow_domain::DateInput;

pub(super) fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/journal", post(upsert_entry))
        .route("/journal/user/{user_id}", get(list_entries))
        .route("/journal/user/{user_id}/date/{date}", get(entry_for_date))
        .route("/journal/{entry_id}", delete(delete_entry))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpsertEntryRequest {
    #[serde(default)]
    user_id: String,
    date: Option<DateInput>,
    content: Option<String>,
    images: Option<Vec<String>>,
}

async fn upsert_entry(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<UpsertEntryRequest>,
) -> Result<(StatusCode, Json<JournalEntryDto>), ApiError> {
    let date = match body.date {
        Some(date) if !body.user_id.trim().is_empty() => date,
        _ => return Err(ApiError::validation("userId and date are required")),
    };

    let result = state
        .command_handlers
        .upsert_journal
        .handle(UpsertJournalEntryCommand {
            user_id: body.user_id,
            date,
            content: body.content,
            images: body.images,
        })
        .await?;

    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(result.entry)))
}

async fn list_entries(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<JournalListDto>, ApiError> {
    Ok(Json(state.queries.journal.list_for_user(&user_id).await?))
}

async fn entry_for_date(
    State(state): State<Arc<AppState>>,
    Path((user_id, date)): Path<(String, String)>,
) -> Result<Json<JournalDayDto>, ApiError> {
    Ok(Json(state.queries.journal.for_date(&user_id, &date).await?))
}

async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .command_handlers
        .delete_journal
        .handle(DeleteJournalEntryCommand { entry_id })
        .await?;

    Ok(Json(json!({ "message": "Entry deleted" })))
}
