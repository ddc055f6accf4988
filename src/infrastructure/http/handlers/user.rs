//! User HTTP Handlers

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::application::{CreateUser, ListUsers};
use crate::domain::user::User;
use crate::infrastructure::http::dto::{CreateUserRequest, CreateUserResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解码请求体中的第一个 JSON 值
///
/// 之后的字节被忽略；`null` 等同于空对象；空请求体视为解码失败。
fn decode_create_user(body: &[u8]) -> Result<CreateUserRequest, serde_json::Error> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<CreateUserRequest>>()
        .next();

    match first {
        Some(value) => Ok(value?.unwrap_or_default()),
        None => Err(serde_json::Error::io(std::io::Error::from(
            std::io::ErrorKind::UnexpectedEof,
        ))),
    }
}

/// POST /user
///
/// 请求体按 JSON 解码，不检查 Content-Type。
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let req = decode_create_user(&body)?;

    let result = state
        .create_user_handler
        .handle(CreateUser::from(req))
        .await?;

    Ok(Json(CreateUserResponse {
        last_insert_id: result.id,
    }))
}

/// GET /user
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;

    tracing::debug!(count = users.len(), "Users listed");

    Ok(Json(users))
}
