//! Domain state containers.
//!
//! Each store owns the collections of one domain, exposes derived views, and
//! runs its operations through an [`OperationTracker`]. Operations never
//! fail: a remote failure is recorded in the error slot and answered with
//! substitute data tagged as [`Outcome::Fallback`](postdeck_core::Outcome).

mod session_store;
mod social_media_store;
mod tracker;
mod twitter_store;

pub use session_store::{SessionState, SessionStore};
pub use social_media_store::{SocialMediaState, SocialMediaStore};
pub use tracker::{OperationGuard, OperationTracker};
pub use twitter_store::{TwitterState, TwitterStore};
