pub mod page;
pub mod todo;
pub mod user;

pub use page::Page;
pub use todo::{NewTodo, Todo, TodoChanges};
pub use user::{NewUser, User, UserChanges};
