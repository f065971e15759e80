//! Team domain module
//!
//! Teams group users. A user belongs to at most one team at a time.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamId};
pub use repository::TeamRepository;
pub use validation::{validate_team_name, TeamValidationError};

#[cfg(test)]
pub use repository::mock::MockTeamRepository;
