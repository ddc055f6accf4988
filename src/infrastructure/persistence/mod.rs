//! Persistence Layer - 数据持久化

pub mod sqlite;

pub use self::sqlite::SqliteUserRepository;
