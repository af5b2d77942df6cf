//! Route table and authentication guard.
//!
//! Every dashboard screen maps to a [`Route`]. All routes except the login
//! screen require a bearer token; the guard sends unauthenticated visitors to
//! login.

use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Route {
    Login,
    Dashboard,
    Accounts,
    Tweets,
    Automation,
    Analytics,
    IntegratedOperations,
    CommentGeneration,
    TweetGeneration,
    ContentEvaluation,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Accounts => "/accounts",
            Route::Tweets => "/tweets",
            Route::Automation => "/automation",
            Route::Analytics => "/analytics",
            Route::IntegratedOperations => "/integrated-operations",
            Route::CommentGeneration => "/comment-generation",
            Route::TweetGeneration => "/tweet-generation",
            Route::ContentEvaluation => "/content-evaluation",
            Route::Settings => "/settings",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Looks up a route by path. `/` redirects to the dashboard.
    pub fn resolve(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Dashboard);
        }
        Route::iter().find(|route| route.path() == trimmed)
    }

    pub fn all() -> Vec<Route> {
        Route::iter().collect()
    }
}

/// What the guard decided for a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allow(Route),
    Redirect(Route),
}

/// Gates `route` on the authentication flag.
pub fn guard(route: Route, is_authenticated: bool) -> Navigation {
    if route.requires_auth() && !is_authenticated {
        Navigation::Redirect(Route::Login)
    } else {
        Navigation::Allow(route)
    }
}
