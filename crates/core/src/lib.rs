//! RewardHub Core - Shared data models and errors

pub mod errors;
pub mod models;

pub use errors::{Error, Result};
pub use models::*;
