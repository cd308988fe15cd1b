use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    create_todo::CreateTodoUseCase, create_user::CreateUserUseCase,
    delete_todo::DeleteTodoUseCase, delete_user::DeleteUserUseCase, get_todo::GetTodoUseCase,
    get_user::GetUserUseCase, list_todos::ListTodosUseCase, list_users::ListUsersUseCase,
    update_todo::UpdateTodoUseCase, update_user::UpdateUserUseCase,
};
use crate::domain::repositories::{TodoRepository, UserRepository};

#[derive(Clone)]
pub struct ApiState {
    pub create_todo_usecase: Arc<CreateTodoUseCase>,
    pub get_todo_usecase: Arc<GetTodoUseCase>,
    pub list_todos_usecase: Arc<ListTodosUseCase>,
    pub update_todo_usecase: Arc<UpdateTodoUseCase>,
    pub delete_todo_usecase: Arc<DeleteTodoUseCase>,
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub update_user_usecase: Arc<UpdateUserUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
}

impl ApiState {
    pub fn new(todo_repo: Arc<dyn TodoRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            create_todo_usecase: Arc::new(CreateTodoUseCase::new(todo_repo.clone())),
            get_todo_usecase: Arc::new(GetTodoUseCase::new(todo_repo.clone())),
            list_todos_usecase: Arc::new(ListTodosUseCase::new(todo_repo.clone())),
            update_todo_usecase: Arc::new(UpdateTodoUseCase::new(todo_repo.clone())),
            delete_todo_usecase: Arc::new(DeleteTodoUseCase::new(todo_repo.clone())),
            create_user_usecase: Arc::new(CreateUserUseCase::new(
                user_repo.clone(),
                todo_repo.clone(),
            )),
            get_user_usecase: Arc::new(GetUserUseCase::new(user_repo.clone(), todo_repo.clone())),
            list_users_usecase: Arc::new(ListUsersUseCase::new(
                user_repo.clone(),
                todo_repo.clone(),
            )),
            update_user_usecase: Arc::new(UpdateUserUseCase::new(
                user_repo.clone(),
                todo_repo,
            )),
            delete_user_usecase: Arc::new(DeleteUserUseCase::new(user_repo)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    /// Flat todo collection
    TodosV1,
    /// Users with nested todos
    UsersV2,
}
