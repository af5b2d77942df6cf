//! Social account domain module.
//!
//! # Module Structure
//!
//! - `model`: Connected social accounts and the platform grouping view

mod model;

pub use model::{Platform, PlatformGroup, SocialAccount, connected_accounts, group_by_platform};
