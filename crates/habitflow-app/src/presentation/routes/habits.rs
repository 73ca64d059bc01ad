use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::dtos::{
    CalendarMonthDto, CompletionResultDto, DashboardStatsDto, HabitDto, HabitListDto, StreakDto,
    StreakPreviewDto, TodayDto,
};
use crate::presentation::error::ApiError;
use crate::presentation::extract::{ApiJson, ApiQuery};
use crate::presentation::state::AppState;
use habitflow_domain::{Clock, DateInput};

pub(super) fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/habits", post(create_habit))
        .route("/habits/user/{user_id}", get(list_habits))
        .route("/habits/user/{user_id}/today", get(today))
        .route("/habits/user/{user_id}/calendar", get(calendar))
        .route("/habits/user/{user_id}/stats", get(stats))
        .route(
            "/habits/{habit_id}",
            get(get_habit).put(update_habit).delete(delete_habit),
        )
        .route("/habits/{habit_id}/complete", post(complete_today))
        .route("/habits/{habit_id}/complete/today", delete(undo_today))
        .route("/habits/{habit_id}/completion", put(set_completion))
        .route("/habits/{habit_id}/streak", get(streak))
        .route("/habits/{habit_id}/streak/preview", get(preview_streak))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateHabitRequest {
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    name: String,
    description: Option<String>,
    cue_time: Option<String>,
    cue_location: Option<String>,
    stack_after: Option<String>,
    tiny_version: Option<String>,
    frequency: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateHabitRequest {
    #[serde(default)]
    name: String,
    description: Option<String>,
    cue_time: Option<String>,
    cue_location: Option<String>,
    stack_after: Option<String>,
    tiny_version: Option<String>,
    frequency: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
struct SetCompletionRequest {
    date: DateInput,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct PreviewParams {
    date: String,
    #[serde(default = "default_completed")]
    completed: bool,
}

fn default_completed() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct CalendarParams {
    year: Option<i32>,
    month: Option<u32>,
}

async fn create_habit(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateHabitRequest>,
) -> Result<(StatusCode, Json<HabitDto>), ApiError> {
    if body.user_id.trim().is_empty() {
        return Err(ApiError::validation("userId is required"));
    }

    let habit = state
        .command_handlers
        .create_habit
        .handle(CreateHabitCommand {
            user_id: body.user_id,
            name: body.name,
            description: body.description,
            cue_time: body.cue_time,
            cue_location: body.cue_location,
            stack_after: body.stack_after,
            tiny_version: body.tiny_version,
            frequency: body.frequency,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(habit)))
}

async fn list_habits(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<HabitListDto>, ApiError> {
    Ok(Json(state.queries.habit.list_for_user(&user_id).await?))
}

async fn today(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<TodayDto>, ApiError> {
    Ok(Json(state.queries.progress.get_today(&user_id).await?))
}

async fn calendar(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    ApiQuery(params): ApiQuery<CalendarParams>,
) -> Result<Json<CalendarMonthDto>, ApiError> {
    let today = state.runtime.clock.today();
    let year = params.year.unwrap_or_else(|| today.year());
    let month = params.month.unwrap_or_else(|| today.month());

    Ok(Json(
        state
            .queries
            .progress
            .get_calendar(&user_id, year, month)
            .await?,
    ))
}

async fn stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<DashboardStatsDto>, ApiError> {
    Ok(Json(state.queries.progress.get_stats(&user_id).await?))
}

async fn get_habit(
    State(state): State<Arc<AppState>>,
    Path(habit_id): Path<String>,
) -> Result<Json<HabitDto>, ApiError> {
    Ok(Json(state.queries.habit.get(&habit_id).await?))
}

async fn update_habit(
    State(state): State<Arc<AppState>>,
    Path(habit_id): Path<String>,
    ApiJson(body): ApiJson<UpdateHabitRequest>,
) -> Result<Json<HabitDto>, ApiError> {
    let habit = state
        .command_handlers
        .update_habit
        .handle(UpdateHabitCommand {
            habit_id,
            name: body.name,
            description: body.description,
            cue_time: body.cue_time,
            cue_location: body.cue_location,
            stack_after: body.stack_after,
            tiny_version: body.tiny_version,
            frequency: body.frequency,
        })
        .await?;

    Ok(Json(habit))
}

async fn delete_habit(
    State(state): State<Arc<AppState>>,
    Path(habit_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .command_handlers
        .delete_habit
        .handle(DeleteHabitCommand { habit_id })
        .await?;

    Ok(Json(json!({ "message": "Habit deleted" })))
}

async fn complete_today(
    State(state): State<Arc<AppState>>,
    Path(habit_id): Path<String>,
) -> Result<Json<CompletionResultDto>, ApiError> {
    let result = state
        .command_handlers
        .complete_today
        .handle(CompleteHabitTodayCommand { habit_id })
        .await?;

    Ok(Json(result))
}

async fn undo_today(
    State(state): State<Arc<AppState>>,
    Path(habit_id): Path<String>,
) -> Result<Json<CompletionResultDto>, ApiError> {
    let result = state
        .command_handlers
        .undo_today
        .handle(UndoHabitTodayCommand { habit_id })
        .await?;

    Ok(Json(result))
}

async fn set_completion(
    State(state): State<Arc<AppState>>,
    Path(habit_id): Path<String>,
    ApiJson(body): ApiJson<SetCompletionRequest>,
) -> Result<Json<CompletionResultDto>, ApiError> {
    let result = state
        .command_handlers
        .set_completion
        .handle(SetHabitCompletionCommand {
            habit_id,
            date: body.date,
            completed: body.completed,
        })
        .await?;

    Ok(Json(result))
}

async fn streak(
    State(state): State<Arc<AppState>>,
    Path(habit_id): Path<String>,
) -> Result<Json<StreakDto>, ApiError> {
    Ok(Json(state.queries.progress.get_streak(&habit_id).await?))
}

async fn preview_streak(
    State(state): State<Arc<AppState>>,
    Path(habit_id): Path<String>,
    ApiQuery(params): ApiQuery<PreviewParams>,
) -> Result<Json<StreakPreviewDto>, ApiError> {
    let preview = state
        .queries
        .progress
        .preview_streak(&habit_id, DateInput::from(params.date), params.completed)
        .await?;

    Ok(Json(preview))
}
