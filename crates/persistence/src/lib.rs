//! RewardHub Persistence - SQLite ledger store for balances and claims

pub mod sqlite;

pub use sqlite::Database;
