//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（UserRepository）
//! - commands: 写操作（创建用户）
//! - queries: 读操作（列出用户）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{handlers::CreateUserHandler, CreateUser};
pub use error::ApplicationError;
pub use ports::{NewUserRecord, RepositoryError, UserRecord, UserRepositoryPort};
pub use queries::{handlers::ListUsersHandler, ListUsers};
