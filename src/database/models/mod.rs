pub mod todo;
pub mod user;

pub use todo::{NewTodo, Todo};
pub use user::User;
