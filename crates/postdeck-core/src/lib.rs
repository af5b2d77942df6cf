pub mod account;
pub mod config;
pub mod content;
pub mod error;
pub mod outcome;
pub mod remote;
pub mod route;
pub mod storage;
pub mod twitter;
pub mod user;

// Re-export common types
pub use error::{DashboardError, Result};
pub use outcome::Outcome;
