//! Domain layer - Core entities, validation rules and repository traits

pub mod error;
pub mod identity;
pub mod team;
pub mod user;

pub use error::DomainError;
pub use identity::{Identity, Role};
pub use team::{Team, TeamId, TeamRepository};
pub use user::{NewUser, User, UserId, UserRepository};
