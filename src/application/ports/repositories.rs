//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户行（存储层，所有列可为 NULL）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRecord {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth: Option<DateTime<Utc>>,
}

/// 待插入的用户（`id` 由存储分配）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUserRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth: Option<DateTime<Utc>>,
}

/// User Repository Port
///
/// 每次调用独占一个存储连接，调用结束（含出错）即归还。
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 插入用户，返回存储分配的 id
    async fn insert(&self, user: &NewUserRecord) -> Result<i64, RepositoryError>;

    /// 获取所有用户（按存储自然顺序，不过滤）
    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError>;
}
