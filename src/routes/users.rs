// SPDX-License-Identifier: MIT

//! API routes for users, exercises, and exercise logs.

use crate::db::firestore::{LogFilter, DEFAULT_LOG_LIMIT};
use crate::error::{AppError, Result};
use crate::time_utils::{format_date_string, format_utc_rfc3339, parse_client_date};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}/exercises", post(create_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Users ───────────────────────────────────────────────────

/// User projection returned by the user endpoints.
#[derive(Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

#[derive(Deserialize)]
struct CreateUserPayload {
    username: String,
}

/// Create a user. The username is taken as-is: no uniqueness or
/// non-emptiness check.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<CreateUserPayload>,
) -> Result<Json<UserResponse>> {
    let user = state.db.create_user(&payload.username).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
    }))
}

/// List all users. Empty array when none exist.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.db.list_users().await?;

    Ok(Json(
        users
            .into_iter()
            .map(|u| UserResponse {
                id: u.id,
                username: u.username,
            })
            .collect(),
    ))
}

// ─── Exercises ───────────────────────────────────────────────

#[derive(Deserialize)]
struct CreateExercisePayload {
    description: String,
    duration: i64,
    date: Option<String>,
}

/// Response for a logged exercise: the owning user's identity plus the
/// exercise fields, with the date rendered as a calendar string.
#[derive(Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// Resolve the optional client-supplied date, defaulting to now.
///
/// An empty field is treated the same as an absent one (HTML forms submit
/// empty strings for untouched inputs). Anything else that fails to parse
/// is rejected rather than stored as an invalid timestamp.
fn resolve_exercise_date(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        None => Ok(Utc::now()),
        Some(s) if s.is_empty() => Ok(Utc::now()),
        Some(s) => parse_client_date(s).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid 'date' value '{}': expected YYYY-MM-DD or RFC3339",
                s
            ))
        }),
    }
}

/// Log an exercise against a user.
async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(payload): Form<CreateExercisePayload>,
) -> Result<Json<ExerciseResponse>> {
    let user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    let date = resolve_exercise_date(payload.date.as_deref())?;

    let exercise = state
        .db
        .create_exercise(
            &user.id,
            &payload.description,
            payload.duration,
            format_utc_rfc3339(date),
        )
        .await?;

    tracing::info!(
        user_id = %user.id,
        exercise_id = %exercise.id,
        duration = exercise.duration,
        "Exercise logged"
    );

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: display_date(&exercise.date),
    }))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LogQueryParams {
    /// Inclusive lower date bound
    from: Option<String>,
    /// Inclusive upper date bound
    to: Option<String>,
    /// Result cap; anything unusable falls back to the default
    limit: Option<String>,
}

#[derive(Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Serialize)]
pub struct LogResponse {
    pub username: String,
    /// Number of entries actually returned (post-limit)
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

/// Coerce the raw `limit` query value to a result cap.
///
/// A positive integer is used as-is; absent, unparseable, zero, or negative
/// values all fall back to the default.
fn coerce_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_LOG_LIMIT)
}

/// Parse an optional date bound, rejecting unparseable values.
fn parse_date_bound(raw: Option<&str>, name: &str) -> Result<Option<DateTime<Utc>>> {
    raw.filter(|s| !s.is_empty())
        .map(|s| {
            parse_client_date(s).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid '{}' value '{}': expected YYYY-MM-DD or RFC3339",
                    name, s
                ))
            })
        })
        .transpose()
}

/// Render a stored RFC3339 date as the human-readable calendar string.
fn display_date(stored: &str) -> String {
    match DateTime::parse_from_rfc3339(stored) {
        Ok(dt) => format_date_string(dt.with_timezone(&Utc)),
        // Stored dates always come from format_utc_rfc3339, so this arm
        // only fires on hand-edited store contents.
        Err(_) => stored.to_string(),
    }
}

/// Get a user's exercise log, optionally filtered by date range and capped.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LogQueryParams>,
) -> Result<Json<LogResponse>> {
    let user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    let filter = LogFilter {
        from: parse_date_bound(params.from.as_deref(), "from")?.map(format_utc_rfc3339),
        to: parse_date_bound(params.to.as_deref(), "to")?.map(format_utc_rfc3339),
        limit: coerce_limit(params.limit.as_deref()),
    };

    tracing::debug!(
        user_id = %user.id,
        from = ?filter.from,
        to = ?filter.to,
        limit = filter.limit,
        "Fetching exercise log"
    );

    let exercises = state.db.find_exercises(&user.id, &filter).await?;

    let log: Vec<LogEntry> = exercises
        .into_iter()
        .map(|e| LogEntry {
            description: e.description,
            duration: e.duration,
            date: display_date(&e.date),
        })
        .collect();

    Ok(Json(LogResponse {
        username: user.username,
        count: log.len(),
        id: user.id,
        log,
    }))
}
