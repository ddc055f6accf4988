//! User Context - Entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 用户实体
///
/// 存储层所有列均可为 NULL，读取时映射为零值：
/// - `id` → 0
/// - 文本 → 空字符串
/// - `birth` → `0001-01-01T00:00:00Z`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth: DateTime<Utc>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            first_name: String::new(),
            last_name: String::new(),
            birth: zero_time(),
        }
    }
}

/// 零时刻 `0001-01-01T00:00:00Z`
pub fn zero_time() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
