use colored::Colorize;
use postdeck_application::AppContext;
use postdeck_core::route::{self, Navigation, Route};

pub async fn list(context: &AppContext) {
    let authenticated = context.session.is_authenticated().await;
    let session = if authenticated { "signed in".green() } else { "signed out".yellow() };
    println!("{} ({})", "Routes".bold(), session);

    for route in Route::all() {
        let access = match route::guard(route, authenticated) {
            Navigation::Allow(_) => "open".green(),
            Navigation::Redirect(target) => format!("-> {}", target.path()).as_str().yellow(),
        };
        let auth = if route.requires_auth() { "auth" } else { "public" };
        println!("  {:<24} {:<22} {:<7} {}", route.path(), route.to_string(), auth, access);
    }
}
