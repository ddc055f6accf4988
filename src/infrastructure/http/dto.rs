//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::CreateUser;

// ============================================================================
// User DTOs
// ============================================================================

/// POST /user 请求体
///
/// 所有字段可选，`null` 等同于缺省；未知字段（如 `id`）被忽略。
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birth: Option<DateTime<Utc>>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            birth: req.birth,
        }
    }
}

/// POST /user 成功响应
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    #[serde(rename = "LastInsertID")]
    pub last_insert_id: i64,
}
