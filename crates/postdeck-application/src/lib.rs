pub mod context;
pub mod fallback;
pub mod store;

pub use context::AppContext;
pub use store::{
    OperationTracker, SessionState, SessionStore, SocialMediaState, SocialMediaStore,
    TwitterState, TwitterStore,
};
