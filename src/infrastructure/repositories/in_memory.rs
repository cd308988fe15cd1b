use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    models::{NewTodo, NewUser, Page, Todo, TodoChanges, User, UserChanges},
    repositories::{TodoRepository, UserRepository},
};

/// Rows keyed by id. Ids come from a monotonically increasing counter, so
/// iteration order is insertion order.
struct Table<T> {
    last_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Table<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self, page: Page) -> anyhow::Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(page.slice(todos.rows.values().cloned()))
    }

    async fn list_by_user(&self, user_id: i64, page: Page) -> anyhow::Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(page.slice(
            todos
                .rows
                .values()
                .filter(|t| t.user_id == Some(user_id))
                .cloned(),
        ))
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.rows.get(&id).cloned())
    }

    async fn get_for_user(&self, user_id: i64, id: i64) -> anyhow::Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos
            .rows
            .get(&id)
            .filter(|t| t.user_id == Some(user_id))
            .cloned())
    }

    async fn create(&self, todo: NewTodo) -> anyhow::Result<Todo> {
        let now = Utc::now();
        let mut todos = self.todos.write().await;
        let todo = Todo {
            id: todos.next_id(),
            title: todo.title,
            status: todo.status,
            user_id: todo.user_id,
            created_at: now,
            updated_at: now,
        };
        todos.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, changes: TodoChanges) -> anyhow::Result<Option<Todo>> {
        let mut todos = self.todos.write().await;
        Ok(todos.rows.get_mut(&id).map(|todo| {
            todo.apply(changes, Utc::now());
            todo.clone()
        }))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut todos = self.todos.write().await;
        Ok(todos.rows.remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Table<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self, page: Page) -> anyhow::Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(page.slice(users.rows.values().cloned()))
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.rows.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> anyhow::Result<User> {
        let now = Utc::now();
        let mut users = self.users.write().await;
        let user = User {
            id: users.next_id(),
            name: user.name,
            email: user.email,
            created_at: now,
            updated_at: now,
        };
        users.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> anyhow::Result<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.rows.get_mut(&id).map(|user| {
            user.apply(changes, Utc::now());
            user.clone()
        }))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        Ok(users.rows.remove(&id).is_some())
    }
}
