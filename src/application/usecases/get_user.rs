use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{Page, Todo, User},
    repositories::{TodoRepository, UserRepository},
};

/// A user together with the todos it owns.
#[derive(Debug, Clone)]
pub struct UserDetails {
    pub user: User,
    pub todos: Vec<Todo>,
}

pub struct GetUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    todo_repo: Arc<dyn TodoRepository>,
}

impl GetUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            user_repo,
            todo_repo,
        }
    }

    pub async fn execute(&self, id: i64) -> Result<UserDetails, DomainError> {
        let user = self
            .user_repo
            .get(id)
            .await?
            .ok_or(DomainError::NotFound("User"))?;
        Ok(with_todos(self.todo_repo.as_ref(), user).await?)
    }
}

pub(crate) async fn with_todos(
    todo_repo: &dyn TodoRepository,
    user: User,
) -> anyhow::Result<UserDetails> {
    let todos = todo_repo.list_by_user(user.id, Page::ALL).await?;
    Ok(UserDetails { user, todos })
}
