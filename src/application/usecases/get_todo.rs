use std::sync::Arc;

use crate::domain::{errors::DomainError, models::Todo, repositories::TodoRepository};

pub struct GetTodoUseCase {
    repo: Arc<dyn TodoRepository>,
}

impl GetTodoUseCase {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Looks a todo up by id. With an `owner`, a todo that belongs to someone
    /// else is reported as missing.
    pub async fn execute(&self, id: i64, owner: Option<i64>) -> Result<Todo, DomainError> {
        find_todo(self.repo.as_ref(), id, owner)
            .await?
            .ok_or(DomainError::NotFound("Todo"))
    }
}

pub(crate) async fn find_todo(
    repo: &dyn TodoRepository,
    id: i64,
    owner: Option<i64>,
) -> anyhow::Result<Option<Todo>> {
    match owner {
        Some(user_id) => repo.get_for_user(user_id, id).await,
        None => repo.get(id).await,
    }
}
