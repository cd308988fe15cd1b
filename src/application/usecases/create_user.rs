use std::sync::Arc;

use crate::{
    application::usecases::get_user::{UserDetails, with_todos},
    domain::{
        errors::DomainError,
        models::NewUser,
        repositories::{TodoRepository, UserRepository},
    },
};

pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    todo_repo: Arc<dyn TodoRepository>,
}

pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self {
            user_repo,
            todo_repo,
        }
    }

    // The email check and the insert are separate store calls; concurrent
    // creates with the same email can both pass the check.
    pub async fn execute(&self, request: CreateUserRequest) -> Result<UserDetails, DomainError> {
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            tracing::info!("user create rejected: email already in use");
            return Err(DomainError::AlreadyExists("Email"));
        }

        let user = self
            .user_repo
            .create(NewUser {
                name: request.name,
                email: request.email,
            })
            .await?;

        tracing::info!(user_id = user.id, "user created");
        // nested todos may already reference this id
        Ok(with_todos(self.todo_repo.as_ref(), user).await?)
    }
}
