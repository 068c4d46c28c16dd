//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{HealthResponse, PostPayload};
use super::error::AppError;
use super::state::AppState;
use crate::api::{Post, PostId};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Post CRUD
// =============================================================================

/// GET /api/v1/posts
///
/// List all posts, in ascending id order.
pub async fn list_posts(State(state): State<AppState>) -> HandlerResult<Vec<Post>> {
    let posts = db_services::get_all_posts(state.repository.as_ref()).await?;

    Ok(Json(posts))
}

/// GET /api/v1/post/{id}
///
/// Fetch a single post. Responds 404 when no post with the given id exists.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> HandlerResult<Post> {
    let post = db_services::get_post_by_id(state.repository.as_ref(), PostId::new(id)).await?;

    Ok(Json(post))
}

/// POST /api/v1/post
///
/// Create a new post. Responds 201 with the persisted post, id included.
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let saved = db_services::save_post(state.repository.as_ref(), payload.into_post()).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /api/v1/post/{id}
///
/// Update an existing post's title and description. Responds 404 when no
/// post with the given id exists.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PostPayload>,
) -> HandlerResult<Post> {
    let updated =
        db_services::update_post(state.repository.as_ref(), PostId::new(id), payload.into_post())
            .await?;

    Ok(Json(updated))
}

/// DELETE /api/v1/post/{id}
///
/// Delete a post. Responds 204 with an empty body on success, 404 when no
/// post with the given id exists.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    db_services::delete_post(state.repository.as_ref(), PostId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
