//! User infrastructure module
//!
//! Password storage schemes, the in-memory and PostgreSQL user
//! repositories, and the user service behind signup and login.

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher, PasswordScheme, PlaintextHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{SignupRequest, UserService};
