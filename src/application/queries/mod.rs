//! 应用层 - 查询（读操作）

mod user_queries;

pub mod handlers;

pub use user_queries::*;
