pub mod config_service;
pub mod http_client;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::http_client::HttpRemoteService;
pub use crate::storage::{FileStorage, MemoryStorage};
