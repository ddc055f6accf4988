//! User Commands

use chrono::{DateTime, Utc};

/// 创建用户命令
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth: Option<DateTime<Utc>>,
}
