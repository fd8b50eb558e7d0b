pub mod mapping;
pub mod memory;
pub mod uow;

mod connection;
mod models;
mod repository;

pub use connection::{DbPool, establish_connection_pool};
pub use memory::InMemoryUnitOfWorkProvider;
pub use repository::*;
