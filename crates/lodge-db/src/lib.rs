pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::mason_repository::MasonRepository;
