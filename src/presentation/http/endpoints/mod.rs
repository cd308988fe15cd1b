pub mod health;
pub mod root;
pub mod todos;
pub mod users;
