//! RewardHub Engine - Daily claim, streak, and reconciliation logic

pub mod clock;
pub mod reconcile;
pub mod service;
pub mod store;
pub mod streak;

pub use clock::{Clock, FixedClock, UtcClock};
pub use service::PointsService;
pub use store::LedgerStore;
