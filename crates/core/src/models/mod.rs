//! Data models shared across the workspace

mod points;

pub use points::*;
