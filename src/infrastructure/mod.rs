//! Infrastructure layer - Storage, credentials and tokens

pub mod auth;
pub mod logging;
pub mod storage;
pub mod team;
pub mod user;
