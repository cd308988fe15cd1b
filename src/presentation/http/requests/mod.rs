use poem_openapi::Object;

use crate::domain::models::{TodoChanges, UserChanges};

/// Body of todo creation and full replacement.
#[derive(Object, Debug)]
pub struct TodoRequestDto {
    #[oai(validator(min_length = 1))]
    pub title: String,
    pub status: String,
}

/// Body of a partial todo update. Omitted fields are left untouched.
#[derive(Object, Debug)]
pub struct TodoPatchRequestDto {
    #[oai(validator(min_length = 1))]
    pub title: Option<String>,
    pub status: Option<String>,
}

#[derive(Object, Debug)]
pub struct UserRequestDto {
    #[oai(validator(min_length = 1))]
    pub name: String,
    pub email: String,
}

#[derive(Object, Debug)]
pub struct UserPatchRequestDto {
    #[oai(validator(min_length = 1))]
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<TodoRequestDto> for TodoChanges {
    fn from(value: TodoRequestDto) -> Self {
        TodoChanges {
            title: Some(value.title),
            status: Some(value.status),
        }
    }
}

impl From<TodoPatchRequestDto> for TodoChanges {
    fn from(value: TodoPatchRequestDto) -> Self {
        TodoChanges {
            title: value.title,
            status: value.status,
        }
    }
}

impl From<UserRequestDto> for UserChanges {
    fn from(value: UserRequestDto) -> Self {
        UserChanges {
            name: Some(value.name),
            email: Some(value.email),
        }
    }
}

impl From<UserPatchRequestDto> for UserChanges {
    fn from(value: UserPatchRequestDto) -> Self {
        UserChanges {
            name: value.name,
            email: value.email,
        }
    }
}
