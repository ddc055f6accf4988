//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{UserRecord, UserRepositoryPort};
use crate::application::queries::ListUsers;
use crate::domain::user::{zero_time, User};

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            first_name: record.first_name.unwrap_or_default(),
            last_name: record.last_name.unwrap_or_default(),
            birth: record.birth.unwrap_or_else(zero_time),
        }
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 全有或全无：任何一行解析失败都会丢弃已读取的行
    pub async fn handle(&self, _query: ListUsers) -> Result<Vec<User>, ApplicationError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(User::from).collect())
    }
}
