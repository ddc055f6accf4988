//! HTTP Middleware
//!
//! 按状态码记录失败请求

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// HTTP 状态码错误日志中间件
///
/// 4xx 记 warn，5xx 记 error。应用层错误的具体原因在 `ApiError::into_response()` 中记录。
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    use crate::infrastructure::http::handlers::method_not_allowed;

    async fn ok_handler() -> &'static str {
        "hello world"
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/", get(ok_handler).fallback(method_not_allowed))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_success_through() {
        assert_eq!(status_of("GET", "/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_passes_client_errors_through() {
        assert_eq!(status_of("POST", "/").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("GET", "/missing").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_passes_server_errors_through() {
        assert_eq!(
            status_of("GET", "/error").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
