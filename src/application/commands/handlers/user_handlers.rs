//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateUser;
use crate::application::error::ApplicationError;
use crate::application::ports::{NewUserRecord, UserRepositoryPort};

// ============================================================================
// CreateUser
// ============================================================================

/// 创建用户响应
#[derive(Debug, Clone)]
pub struct CreateUserResponse {
    pub id: i64,
}

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<CreateUserResponse, ApplicationError> {
        let record = NewUserRecord {
            first_name: command.first_name,
            last_name: command.last_name,
            birth: command.birth,
        };

        let id = self.user_repo.insert(&record).await?;

        tracing::info!(user_id = id, "User created");

        Ok(CreateUserResponse { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{RepositoryError, UserRecord};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepo {
        inserted: Mutex<Vec<NewUserRecord>>,
    }

    #[async_trait]
    impl UserRepositoryPort for RecordingRepo {
        async fn insert(&self, user: &NewUserRecord) -> Result<i64, RepositoryError> {
            let mut inserted = self.inserted.lock().unwrap();
            inserted.push(user.clone());
            Ok(inserted.len() as i64)
        }

        async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    struct FailingRepo;

    #[async_trait]
    impl UserRepositoryPort for FailingRepo {
        async fn insert(&self, _user: &NewUserRecord) -> Result<i64, RepositoryError> {
            Err(RepositoryError::DatabaseError("no such table: users".to_string()))
        }

        async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
            Err(RepositoryError::DatabaseError("no such table: users".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_user_passes_fields_through() {
        let repo = Arc::new(RecordingRepo::default());
        let handler = CreateUserHandler::new(repo.clone());
        let birth = Utc.with_ymd_and_hms(1815, 12, 10, 0, 0, 0).unwrap();

        let result = handler
            .handle(CreateUser {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                birth: Some(birth),
            })
            .await
            .unwrap();

        assert_eq!(result.id, 1);
        let inserted = repo.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].first_name.as_deref(), Some("Ada"));
        assert_eq!(inserted[0].last_name.as_deref(), Some("Lovelace"));
        assert_eq!(inserted[0].birth, Some(birth));
    }

    #[tokio::test]
    async fn test_create_user_keeps_absent_fields_absent() {
        let repo = Arc::new(RecordingRepo::default());
        let handler = CreateUserHandler::new(repo.clone());

        handler.handle(CreateUser::default()).await.unwrap();

        let inserted = repo.inserted.lock().unwrap();
        assert_eq!(inserted[0], NewUserRecord::default());
    }

    #[tokio::test]
    async fn test_create_user_surfaces_repository_error() {
        let handler = CreateUserHandler::new(Arc::new(FailingRepo));

        let err = handler.handle(CreateUser::default()).await.unwrap_err();
        assert!(err.to_string().contains("no such table: users"));
    }
}
