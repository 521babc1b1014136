use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use quorum_types::api::{Claims, CreateLikeRequest, QuestionLikesResponse};

use crate::auth::AppState;
use crate::log_store_error;

pub async fn create_like(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateLikeRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let like = state
        .likes
        .create(claims.sub, req.question_id)
        .map_err(log_store_error)?;

    Ok((StatusCode::CREATED, Json(like)))
}

pub async fn list_likes(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<impl IntoResponse, StatusCode> {
    let likes = state
        .likes
        .list_by_question(question_id)
        .map_err(log_store_error)?;

    Ok(Json(QuestionLikesResponse {
        question_id,
        count: likes.len(),
        likes,
    }))
}

pub async fn delete_like(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<StatusCode, StatusCode> {
    let like = state
        .likes
        .find_by_id(id)
        .map_err(log_store_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    // Only the like's owner may remove it.
    if like.user_id != claims.sub {
        return Err(StatusCode::FORBIDDEN);
    }

    state.likes.delete(id).map_err(log_store_error)?;
    Ok(StatusCode::NO_CONTENT)
}
