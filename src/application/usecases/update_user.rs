use std::sync::Arc;

use crate::{
    application::usecases::get_user::{UserDetails, with_todos},
    domain::{
        errors::DomainError,
        models::UserChanges,
        repositories::{TodoRepository, UserRepository},
    },
};

pub struct UpdateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    todo_repo: Arc<dyn TodoRepository>,
}

pub struct UpdateUserRequest {
    pub id: i64,
    pub changes: UserChanges,
}

impl UpdateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            user_repo,
            todo_repo,
        }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> Result<UserDetails, DomainError> {
        if self.user_repo.get(request.id).await?.is_none() {
            return Err(DomainError::NotFound("User"));
        }

        if let Some(email) = request.changes.email.as_deref() {
            let holder = self.user_repo.find_by_email(email).await?;
            if holder.is_some_and(|other| other.id != request.id) {
                tracing::info!(user_id = request.id, "user update rejected: email already in use");
                return Err(DomainError::AlreadyExists("Email"));
            }
        }

        let user = self
            .user_repo
            .update(request.id, request.changes)
            .await?
            .ok_or(DomainError::NotFound("User"))?;

        tracing::info!(user_id = user.id, "user updated");
        Ok(with_todos(self.todo_repo.as_ref(), user).await?)
    }
}
