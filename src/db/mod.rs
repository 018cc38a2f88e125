pub mod connection;
pub mod reports;
pub mod timeline;
pub mod users;

pub use connection::{init_db, seed_db, Database};
