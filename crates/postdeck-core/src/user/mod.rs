//! User domain module.

mod model;

pub use model::{AUTH_TOKEN_KEY, User};
