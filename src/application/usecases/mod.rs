pub mod create_todo;
pub mod create_user;
pub mod delete_todo;
pub mod delete_user;
pub mod get_todo;
pub mod get_user;
pub mod list_todos;
pub mod list_users;
pub mod update_todo;
pub mod update_user;
