use serde::{Deserialize, Serialize};

use crate::models::{Like, User};

// -- JWT Claims --

/// JWT claims shared between token issuance (quorum-api auth handlers) and
/// validation (REST middleware). Canonical definition lives here to
/// eliminate duplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub name: String,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

// -- Likes --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateLikeRequest {
    pub question_id: i64,
}

#[derive(Debug, Serialize)]
pub struct QuestionLikesResponse {
    pub question_id: i64,
    pub count: usize,
    pub likes: Vec<Like>,
}
