//! Greeting Handler
//!
//! `GET /` 返回纯文本问候语

use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

const GREETING: &str = "hello world";

/// 根据实例标识生成问候语
pub fn greeting_text(instance_id: Option<&str>) -> String {
    match instance_id.filter(|id| !id.is_empty()) {
        Some(id) => format!("{}. from {}", GREETING, id),
        None => GREETING.to_string(),
    }
}

/// GET /
pub async fn greeting(State(state): State<Arc<AppState>>) -> String {
    state.greeting.clone()
}

/// 已定义路径上的不支持方法
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "http method not allowed")
}
