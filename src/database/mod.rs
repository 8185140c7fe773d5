pub mod manager;
pub mod models;
pub mod todos;
pub mod users;

pub use manager::{DatabaseError, DatabaseManager};
pub use todos::TodoRepository;
pub use users::UserRepository;
