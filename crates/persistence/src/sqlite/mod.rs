//! SQLite database management

mod balances;
mod claims;
mod connection;

pub use balances::*;
pub use claims::*;
pub use connection::Database;
