use std::sync::Arc;

use crate::domain::{errors::DomainError, repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Removes the user only. Its todos keep their `user_id`.
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound("User"));
        }

        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}
