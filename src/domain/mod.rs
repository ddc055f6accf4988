//! 领域层
//!
//! - User Context: 用户实体

pub mod user;
