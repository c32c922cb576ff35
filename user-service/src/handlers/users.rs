use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{CreateUser, User},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let store = state.store.read().await;
    let users = store.list();

    info!(count = users.len(), "Listed users");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "total": users.len(),
            "users": users,
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let store = state.store.read().await;

    // An unparseable id cannot match any stored record, so it falls through
    // to the same not-found response as an unknown one.
    let user = Uuid::parse_str(&id)
        .ok()
        .and_then(|id| store.get(id))
        .cloned()
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    info!(id = %user.id, "Fetched user");

    Ok(Json(user))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // Required means present and non-empty; an empty string counts as missing.
    let name = payload.name.filter(|n| !n.is_empty());
    let email = payload.email.filter(|e| !e.is_empty());

    let (name, email) = match (name, email) {
        (Some(name), Some(email)) => (name, email),
        _ => {
            return Err(AppError::BadRequest(
                "Name and email are required".to_string(),
            ))
        }
    };

    let user = User::new(name, email, payload.age);

    let mut store = state.store.write().await;
    store.append(user.clone());

    info!(id = %user.id, email = %user.email, total = store.len(), "Created user");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "User created successfully",
            "user": user,
        })),
    ))
}
