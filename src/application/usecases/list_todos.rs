use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{Page, Todo},
    repositories::TodoRepository,
};

pub struct ListTodosUseCase {
    repo: Arc<dyn TodoRepository>,
}

impl ListTodosUseCase {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// All todos, or only those of `owner`. The nested listing is capped lower
    /// than the top-level one.
    pub async fn execute(&self, owner: Option<i64>) -> Result<Vec<Todo>, DomainError> {
        let todos = match owner {
            Some(user_id) => self.repo.list_by_user(user_id, Page::NESTED).await?,
            None => self.repo.list(Page::TOP_LEVEL).await?,
        };
        Ok(todos)
    }
}
