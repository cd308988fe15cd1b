use std::sync::Arc;

use crate::{
    application::usecases::get_todo::find_todo,
    domain::{errors::DomainError, repositories::TodoRepository},
};

pub struct DeleteTodoUseCase {
    repo: Arc<dyn TodoRepository>,
}

impl DeleteTodoUseCase {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64, owner: Option<i64>) -> Result<(), DomainError> {
        if owner.is_some() && find_todo(self.repo.as_ref(), id, owner).await?.is_none() {
            return Err(DomainError::NotFound("Todo"));
        }

        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound("Todo"));
        }

        tracing::info!(todo_id = id, "todo deleted");
        Ok(())
    }
}
