//! Application State
//!
//! 进程级共享状态：命令/查询处理器和问候语

use std::sync::Arc;

use crate::application::{CreateUserHandler, ListUsersHandler, UserRepositoryPort};
use crate::infrastructure::http::handlers::greeting_text;

/// 应用状态
///
/// 不含可变状态，请求之间无需加锁
pub struct AppState {
    pub create_user_handler: CreateUserHandler,
    pub list_users_handler: ListUsersHandler,

    /// `GET /` 的响应文本
    pub greeting: String,
}

impl AppState {
    /// 创建应用状态
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>, instance_id: Option<&str>) -> Self {
        Self {
            create_user_handler: CreateUserHandler::new(user_repo.clone()),
            list_users_handler: ListUsersHandler::new(user_repo),
            greeting: greeting_text(instance_id),
        }
    }
}
