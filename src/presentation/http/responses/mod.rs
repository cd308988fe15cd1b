use chrono::{DateTime, Utc};
use poem_openapi::{ApiResponse, Object, payload::Json};

#[derive(Object, Debug)]
pub struct TodoDto {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Object, Debug)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub todos: Vec<TodoDto>,
}

#[derive(Object, Debug)]
pub struct ErrorDto {
    pub detail: String,
}

#[derive(ApiResponse)]
pub enum CreatedTodoResponse {
    #[oai(status = 201)]
    Created(Json<TodoDto>),
}

#[derive(ApiResponse)]
pub enum CreatedUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
}

#[derive(ApiResponse)]
pub enum DeletedResponse {
    #[oai(status = 204)]
    NoContent,
}

#[derive(ApiResponse)]
pub enum ErrorResponse {
    /// The entity does not exist or the request conflicts with stored data.
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 500)]
    Internal(Json<ErrorDto>),
}
