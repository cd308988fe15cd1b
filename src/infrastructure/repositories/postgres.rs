use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};

use crate::domain::{
    models::{NewTodo, NewUser, Page, Todo, TodoChanges, User, UserChanges},
    repositories::{TodoRepository, UserRepository},
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn list(&self, page: Page) -> anyhow::Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRecord>(
            r#"
            SELECT id, title, status, user_id, created_at, updated_at
            FROM todos
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn list_by_user(&self, user_id: i64, page: Page) -> anyhow::Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRecord>(
            r#"
            SELECT id, title, status, user_id, created_at, updated_at
            FROM todos
            WHERE user_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Todo>> {
        let record = sqlx::query_as::<_, TodoRecord>(
            r#"SELECT id, title, status, user_id, created_at, updated_at FROM todos WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Todo::from))
    }

    async fn get_for_user(&self, user_id: i64, id: i64) -> anyhow::Result<Option<Todo>> {
        let record = sqlx::query_as::<_, TodoRecord>(
            r#"
            SELECT id, title, status, user_id, created_at, updated_at
            FROM todos
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Todo::from))
    }

    async fn create(&self, todo: NewTodo) -> anyhow::Result<Todo> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, TodoRecord>(
            r#"
            INSERT INTO todos (title, status, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, title, status, user_id, created_at, updated_at
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.status)
        .bind(todo.user_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(record.into())
    }

    async fn update(&self, id: i64, changes: TodoChanges) -> anyhow::Result<Option<Todo>> {
        let record = sqlx::query_as::<_, TodoRecord>(
            r#"
            UPDATE todos
            SET title = COALESCE($2, title),
                status = COALESCE($3, status),
                updated_at = $4
            WHERE id = $1
            RETURNING id, title, status, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Todo::from))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM todos WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self, page: Page) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, email, created_at, updated_at FROM users WHERE email = $1 LIMIT 1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn create(&self, user: NewUser) -> anyhow::Result<User> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(record.into())
    }

    async fn update(&self, id: i64, changes: UserChanges) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                updated_at = $4
            WHERE id = $1
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.email)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(FromRow)]
struct TodoRecord {
    id: i64,
    title: String,
    status: String,
    user_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TodoRecord> for Todo {
    fn from(value: TodoRecord) -> Self {
        Todo {
            id: value.id,
            title: value.title,
            status: value.status,
            user_id: value.user_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        User {
            id: value.id,
            name: value.name,
            email: value.email,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
