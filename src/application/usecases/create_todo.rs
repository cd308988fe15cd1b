use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{NewTodo, Todo},
    repositories::TodoRepository,
};

pub struct CreateTodoUseCase {
    repo: Arc<dyn TodoRepository>,
}

pub struct CreateTodoRequest {
    pub title: String,
    pub status: String,
    /// Owner taken from the request path. Not checked against the user store.
    pub user_id: Option<i64>,
}

impl CreateTodoUseCase {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateTodoRequest) -> Result<Todo, DomainError> {
        let todo = self
            .repo
            .create(NewTodo {
                title: request.title,
                status: request.status,
                user_id: request.user_id,
            })
            .await?;

        tracing::info!(todo_id = todo.id, user_id = ?todo.user_id, "todo created");
        Ok(todo)
    }
}
