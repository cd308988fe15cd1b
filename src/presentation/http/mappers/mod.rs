use crate::{
    application::usecases::get_user::UserDetails,
    domain::models::Todo,
    presentation::http::responses::{TodoDto, UserDto},
};

pub fn map_todo(todo: &Todo) -> TodoDto {
    TodoDto {
        id: todo.id,
        title: todo.title.clone(),
        status: todo.status.clone(),
        created_at: todo.created_at,
        updated_at: todo.updated_at,
    }
}

pub fn map_user(details: &UserDetails) -> UserDto {
    let user = &details.user;
    UserDto {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: user.created_at,
        updated_at: user.updated_at,
        todos: details.todos.iter().map(map_todo).collect(),
    }
}
