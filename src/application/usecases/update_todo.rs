use std::sync::Arc;

use crate::{
    application::usecases::get_todo::find_todo,
    domain::{
        errors::DomainError,
        models::{Todo, TodoChanges},
        repositories::TodoRepository,
    },
};

pub struct UpdateTodoUseCase {
    repo: Arc<dyn TodoRepository>,
}

pub struct UpdateTodoRequest {
    pub id: i64,
    pub owner: Option<i64>,
    pub changes: TodoChanges,
}

impl UpdateTodoUseCase {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateTodoRequest) -> Result<Todo, DomainError> {
        if request.owner.is_some()
            && find_todo(self.repo.as_ref(), request.id, request.owner)
                .await?
                .is_none()
        {
            tracing::debug!(todo_id = request.id, owner = ?request.owner, "todo not owned by user");
            return Err(DomainError::NotFound("Todo"));
        }

        let todo = self
            .repo
            .update(request.id, request.changes)
            .await?
            .ok_or(DomainError::NotFound("Todo"))?;

        tracing::info!(todo_id = todo.id, "todo updated");
        Ok(todo)
    }
}
