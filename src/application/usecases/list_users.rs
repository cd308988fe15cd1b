use std::sync::Arc;

use crate::{
    application::usecases::get_user::{UserDetails, with_todos},
    domain::{
        errors::DomainError,
        models::Page,
        repositories::{TodoRepository, UserRepository},
    },
};

pub struct ListUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
    todo_repo: Arc<dyn TodoRepository>,
}

impl ListUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            user_repo,
            todo_repo,
        }
    }

    pub async fn execute(&self) -> Result<Vec<UserDetails>, DomainError> {
        let users = self.user_repo.list(Page::TOP_LEVEL).await?;

        let mut details = Vec::with_capacity(users.len());
        for user in users {
            details.push(with_todos(self.todo_repo.as_ref(), user).await?);
        }
        Ok(details)
    }
}
