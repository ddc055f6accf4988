//! HTTP Routes
//!
//! API Endpoints:
//! - /      GET   问候语
//! - /user  GET   列出所有用户
//! - /user  POST  创建用户
//!
//! 已定义路径上的其他方法返回 400 `http method not allowed`，
//! 未定义路径返回 404。应用层错误以 200 + `errno` 错误体返回。

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::greeting).fallback(handlers::method_not_allowed),
        )
        .route(
            "/user",
            get(handlers::list_users)
                .post(handlers::create_user)
                .fallback(handlers::method_not_allowed),
        )
}
