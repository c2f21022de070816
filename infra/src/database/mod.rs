//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Embedded schema migrations
//! - User directory implementation

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::MySqlUserDirectory;
