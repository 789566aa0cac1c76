pub mod connection;
pub mod kv;
pub mod setup;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
