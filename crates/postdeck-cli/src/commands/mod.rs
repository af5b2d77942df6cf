pub mod accounts;
pub mod content;
pub mod routes;
pub mod session;
pub mod twitter;

use colored::Colorize;
use postdeck_application::AppContext;
use postdeck_core::Outcome;
use postdeck_core::route::{self, Navigation, Route};

/// Applies the auth guard for `route`. Returns whether the command may run.
pub async fn enter(context: &AppContext, route: Route) -> bool {
    let authenticated = context.session.is_authenticated().await;
    match route::guard(route, authenticated) {
        Navigation::Allow(_) => true,
        Navigation::Redirect(target) => {
            println!(
                "{} {} requires a session, redirecting to {}. Run `postdeck login <email>` first.",
                "🔒".yellow(),
                route.path().bold(),
                target.path().cyan()
            );
            false
        }
    }
}

/// Prints a header line for an outcome, flagging substitute data.
pub fn announce<T>(title: &str, outcome: &Outcome<T>) {
    match outcome.error() {
        None => println!("{}", title.bold()),
        Some(err) => {
            println!("{} {}", title.bold(), "(offline sample data)".yellow());
            println!("   {} {}", "↳".dimmed(), err.to_string().as_str().dimmed());
        }
    }
}

pub fn check(flag: bool) -> colored::ColoredString {
    if flag { "●".green() } else { "○".dimmed() }
}
