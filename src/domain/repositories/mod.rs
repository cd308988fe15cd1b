use async_trait::async_trait;

use crate::domain::models::{NewTodo, NewUser, Page, Todo, TodoChanges, User, UserChanges};

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn list(&self, page: Page) -> anyhow::Result<Vec<Todo>>;
    async fn list_by_user(&self, user_id: i64, page: Page) -> anyhow::Result<Vec<Todo>>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<Todo>>;
    /// Like `get`, but only matches a todo owned by `user_id`.
    async fn get_for_user(&self, user_id: i64, id: i64) -> anyhow::Result<Option<Todo>>;
    async fn create(&self, todo: NewTodo) -> anyhow::Result<Todo>;
    async fn update(&self, id: i64, changes: TodoChanges) -> anyhow::Result<Option<Todo>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, page: Page) -> anyhow::Result<Vec<User>>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn create(&self, user: NewUser) -> anyhow::Result<User>;
    async fn update(&self, id: i64, changes: UserChanges) -> anyhow::Result<Option<User>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
