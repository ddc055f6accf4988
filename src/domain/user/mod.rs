//! User Context - 用户限界上下文
//!
//! 职责:
//! - User 实体
//! - 缺省值（零值）规则

mod entity;

pub use entity::{zero_time, User};
