//! userbook - 问候语 + 用户记录 HTTP 服务
//!
//! 分层：
//!
//! 领域层 (domain/):
//! - User 实体与零值规则
//!
//! 应用层 (application/):
//! - Ports: UserRepositoryPort
//! - Commands: CreateUser
//! - Queries: ListUsers
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 路由 `/`、`/user`
//! - Persistence: SQLite 连接池

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
