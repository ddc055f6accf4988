//! SQLite User Repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{NewUserRecord, RepositoryError, UserRecord, UserRepositoryPort};

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Option<i64>,
    first_name: Option<String>,
    last_name: Option<String>,
    birth: Option<String>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            birth: row.birth.as_deref().map(parse_birth).transpose()?,
        })
    }
}

fn format_birth(birth: DateTime<Utc>) -> String {
    birth.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// RFC 3339 或 SQLite 原生的 `YYYY-MM-DD HH:MM:SS[.fff]`（视为 UTC）
fn parse_birth(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    if let Ok(birth) = DateTime::parse_from_rfc3339(raw) {
        return Ok(birth.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| RepositoryError::SerializationError(format!("invalid birth value: {}", raw)))
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn insert(&self, user: &NewUserRecord) -> Result<i64, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, birth) VALUES (?, ?, ?)",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.birth.map(format_birth))
        .execute(&mut *conn)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT id, first_name, last_name, birth FROM users")
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }
}
