/// Users API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roster_core::{User, UserDraft, UserPatch};
use serde::Serialize;

/// Mutation response envelope: a human-readable message plus the record
/// the operation produced
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub message: String,
    pub data: User,
}

/// GET /api/users
/// List active users in insertion order
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.users()?.list_active();
    Ok(Json(users))
}

/// POST /api/users
/// Create a new user; the id is generated server-side and the record
/// always starts active
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> Result<(StatusCode, Json<UserEnvelope>)> {
    let user = state.users()?.create(&draft)?;
    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            message: "User created successfully".to_string(),
            data: user,
        }),
    ))
}

/// GET /api/users/:id
/// Mirrors the collection listing: the path id is accepted but not used.
/// Single-item lookup has never been exposed here and clients depend on
/// the listing shape.
pub async fn get_user(
    Path(_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>> {
    let users = state.users()?.list_active();
    Ok(Json(users))
}

/// PUT /api/users/:id
/// Replace name, email and the active flag of an existing user
pub async fn replace_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<UserEnvelope>> {
    let user = state.users()?.replace(&id, &draft)?;
    Ok(Json(UserEnvelope {
        message: "User fully updated".to_string(),
        data: user,
    }))
}

/// PATCH /api/users/:id
/// Update only the supplied fields of an existing user
pub async fn patch_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<UserEnvelope>> {
    let user = state.users()?.patch(&id, &patch)?;
    Ok(Json(UserEnvelope {
        message: "User partially updated".to_string(),
        data: user,
    }))
}

/// DELETE /api/users/:id
/// Logical delete: the record is marked inactive, never removed
pub async fn delete_user(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserEnvelope>> {
    let user = state.users()?.logical_delete(&id)?;
    Ok(Json(UserEnvelope {
        message: "User logically deleted".to_string(),
        data: user,
    }))
}
