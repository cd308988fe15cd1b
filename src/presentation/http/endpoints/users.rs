use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{
        create_todo::CreateTodoRequest, create_user::CreateUserRequest,
        update_todo::UpdateTodoRequest, update_user::UpdateUserRequest,
    },
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_todo, map_user},
        requests::{TodoPatchRequestDto, TodoRequestDto, UserPatchRequestDto, UserRequestDto},
        responses::{
            CreatedTodoResponse, CreatedUserResponse, DeletedResponse, ErrorResponse, TodoDto,
            UserDto,
        },
    },
};

/// Version 2: users as the top-level collection, todos nested under their owner.
#[derive(Clone)]
pub struct UsersV2Endpoints {
    state: Arc<ApiState>,
}

impl UsersV2Endpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi(prefix_path = "/v2")]
impl UsersV2Endpoints {
    /// List all users
    #[oai(path = "/users", method = "get", tag = EndpointsTags::UsersV2)]
    pub async fn list_users(&self) -> Result<Json<Vec<UserDto>>, ErrorResponse> {
        let users = self.state.list_users_usecase.execute().await?;
        Ok(Json(users.iter().map(map_user).collect()))
    }

    /// Create a new user
    #[oai(path = "/users", method = "post", tag = EndpointsTags::UsersV2)]
    pub async fn create_user(
        &self,
        request: Json<UserRequestDto>,
    ) -> Result<CreatedUserResponse, ErrorResponse> {
        let Json(request) = request;
        let user = self
            .state
            .create_user_usecase
            .execute(CreateUserRequest {
                name: request.name,
                email: request.email,
            })
            .await?;

        Ok(CreatedUserResponse::Created(Json(map_user(&user))))
    }

    /// Get user detail
    #[oai(path = "/users/:user_id", method = "get", tag = EndpointsTags::UsersV2)]
    pub async fn get_user(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
    ) -> Result<Json<UserDto>, ErrorResponse> {
        let user = self.state.get_user_usecase.execute(user_id.0).await?;
        Ok(Json(map_user(&user)))
    }

    /// Partial update user
    #[oai(path = "/users/:user_id", method = "patch", tag = EndpointsTags::UsersV2)]
    pub async fn patch_user(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
        request: Json<UserPatchRequestDto>,
    ) -> Result<Json<UserDto>, ErrorResponse> {
        let user = self
            .state
            .update_user_usecase
            .execute(UpdateUserRequest {
                id: user_id.0,
                changes: request.0.into(),
            })
            .await?;

        Ok(Json(map_user(&user)))
    }

    /// Update user
    #[oai(path = "/users/:user_id", method = "put", tag = EndpointsTags::UsersV2)]
    pub async fn put_user(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
        request: Json<UserRequestDto>,
    ) -> Result<Json<UserDto>, ErrorResponse> {
        let user = self
            .state
            .update_user_usecase
            .execute(UpdateUserRequest {
                id: user_id.0,
                changes: request.0.into(),
            })
            .await?;

        Ok(Json(map_user(&user)))
    }

    /// Delete user
    #[oai(path = "/users/:user_id", method = "delete", tag = EndpointsTags::UsersV2)]
    pub async fn delete_user(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
    ) -> Result<DeletedResponse, ErrorResponse> {
        self.state.delete_user_usecase.execute(user_id.0).await?;
        Ok(DeletedResponse::NoContent)
    }

    /// List user's todos
    #[oai(path = "/users/:user_id/todos", method = "get", tag = EndpointsTags::UsersV2)]
    pub async fn list_user_todos(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
    ) -> Result<Json<Vec<TodoDto>>, ErrorResponse> {
        let todos = self
            .state
            .list_todos_usecase
            .execute(Some(user_id.0))
            .await?;
        Ok(Json(todos.iter().map(map_todo).collect()))
    }

    /// Create a new todo for user
    #[oai(path = "/users/:user_id/todos", method = "post", tag = EndpointsTags::UsersV2)]
    pub async fn create_user_todo(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
        request: Json<TodoRequestDto>,
    ) -> Result<CreatedTodoResponse, ErrorResponse> {
        let Json(request) = request;
        let todo = self
            .state
            .create_todo_usecase
            .execute(CreateTodoRequest {
                title: request.title,
                status: request.status,
                user_id: Some(user_id.0),
            })
            .await?;

        Ok(CreatedTodoResponse::Created(Json(map_todo(&todo))))
    }

    /// Get user todo detail
    #[oai(
        path = "/users/:user_id/todos/:todo_id",
        method = "get",
        tag = EndpointsTags::UsersV2
    )]
    pub async fn get_user_todo(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
        #[oai(name = "todo_id")] todo_id: Path<i64>,
    ) -> Result<Json<TodoDto>, ErrorResponse> {
        let todo = self
            .state
            .get_todo_usecase
            .execute(todo_id.0, Some(user_id.0))
            .await?;
        Ok(Json(map_todo(&todo)))
    }

    /// Partial update user todo
    #[oai(
        path = "/users/:user_id/todos/:todo_id",
        method = "patch",
        tag = EndpointsTags::UsersV2
    )]
    pub async fn patch_user_todo(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
        #[oai(name = "todo_id")] todo_id: Path<i64>,
        request: Json<TodoPatchRequestDto>,
    ) -> Result<Json<TodoDto>, ErrorResponse> {
        let todo = self
            .state
            .update_todo_usecase
            .execute(UpdateTodoRequest {
                id: todo_id.0,
                owner: Some(user_id.0),
                changes: request.0.into(),
            })
            .await?;

        Ok(Json(map_todo(&todo)))
    }

    /// Update user todo
    #[oai(
        path = "/users/:user_id/todos/:todo_id",
        method = "put",
        tag = EndpointsTags::UsersV2
    )]
    pub async fn put_user_todo(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
        #[oai(name = "todo_id")] todo_id: Path<i64>,
        request: Json<TodoRequestDto>,
    ) -> Result<Json<TodoDto>, ErrorResponse> {
        let todo = self
            .state
            .update_todo_usecase
            .execute(UpdateTodoRequest {
                id: todo_id.0,
                owner: Some(user_id.0),
                changes: request.0.into(),
            })
            .await?;

        Ok(Json(map_todo(&todo)))
    }

    /// Delete user todo
    #[oai(
        path = "/users/:user_id/todos/:todo_id",
        method = "delete",
        tag = EndpointsTags::UsersV2
    )]
    pub async fn delete_user_todo(
        &self,
        #[oai(name = "user_id")] user_id: Path<i64>,
        #[oai(name = "todo_id")] todo_id: Path<i64>,
    ) -> Result<DeletedResponse, ErrorResponse> {
        self.state
            .delete_todo_usecase
            .execute(todo_id.0, Some(user_id.0))
            .await?;
        Ok(DeletedResponse::NoContent)
    }
}
