use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{create_todo::CreateTodoRequest, update_todo::UpdateTodoRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_todo,
        requests::{TodoPatchRequestDto, TodoRequestDto},
        responses::{CreatedTodoResponse, DeletedResponse, ErrorResponse, TodoDto},
    },
};

/// Version 1: todos as a top-level collection without owners.
#[derive(Clone)]
pub struct TodosV1Endpoints {
    state: Arc<ApiState>,
}

impl TodosV1Endpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi(prefix_path = "/v1")]
impl TodosV1Endpoints {
    /// List all todos
    #[oai(path = "/todos", method = "get", tag = EndpointsTags::TodosV1)]
    pub async fn list_todos(&self) -> Result<Json<Vec<TodoDto>>, ErrorResponse> {
        let todos = self.state.list_todos_usecase.execute(None).await?;
        Ok(Json(todos.iter().map(map_todo).collect()))
    }

    /// Create a new todo
    #[oai(path = "/todos", method = "post", tag = EndpointsTags::TodosV1)]
    pub async fn create_todo(
        &self,
        request: Json<TodoRequestDto>,
    ) -> Result<CreatedTodoResponse, ErrorResponse> {
        let Json(request) = request;
        let todo = self
            .state
            .create_todo_usecase
            .execute(CreateTodoRequest {
                title: request.title,
                status: request.status,
                user_id: None,
            })
            .await?;

        Ok(CreatedTodoResponse::Created(Json(map_todo(&todo))))
    }

    /// Get todo detail
    #[oai(path = "/todos/:todo_id", method = "get", tag = EndpointsTags::TodosV1)]
    pub async fn get_todo(
        &self,
        #[oai(name = "todo_id")] todo_id: Path<i64>,
    ) -> Result<Json<TodoDto>, ErrorResponse> {
        let todo = self.state.get_todo_usecase.execute(todo_id.0, None).await?;
        Ok(Json(map_todo(&todo)))
    }

    /// Partial update todo
    #[oai(path = "/todos/:todo_id", method = "patch", tag = EndpointsTags::TodosV1)]
    pub async fn patch_todo(
        &self,
        #[oai(name = "todo_id")] todo_id: Path<i64>,
        request: Json<TodoPatchRequestDto>,
    ) -> Result<Json<TodoDto>, ErrorResponse> {
        let todo = self
            .state
            .update_todo_usecase
            .execute(UpdateTodoRequest {
                id: todo_id.0,
                owner: None,
                changes: request.0.into(),
            })
            .await?;

        Ok(Json(map_todo(&todo)))
    }

    /// Update todo
    #[oai(path = "/todos/:todo_id", method = "put", tag = EndpointsTags::TodosV1)]
    pub async fn put_todo(
        &self,
        #[oai(name = "todo_id")] todo_id: Path<i64>,
        request: Json<TodoRequestDto>,
    ) -> Result<Json<TodoDto>, ErrorResponse> {
        let todo = self
            .state
            .update_todo_usecase
            .execute(UpdateTodoRequest {
                id: todo_id.0,
                owner: None,
                changes: request.0.into(),
            })
            .await?;

        Ok(Json(map_todo(&todo)))
    }

    /// Delete todo
    #[oai(path = "/todos/:todo_id", method = "delete", tag = EndpointsTags::TodosV1)]
    pub async fn delete_todo(
        &self,
        #[oai(name = "todo_id")] todo_id: Path<i64>,
    ) -> Result<DeletedResponse, ErrorResponse> {
        self.state
            .delete_todo_usecase
            .execute(todo_id.0, None)
            .await?;
        Ok(DeletedResponse::NoContent)
    }
}
