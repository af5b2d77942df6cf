use super::announce;
use colored::Colorize;
use postdeck_application::AppContext;

pub async fn login(context: &AppContext, email: &str, password: &str) {
    println!("🔑 Signing in as {}...", email.cyan());
    if context.session.login(email, password).await {
        println!("{} Signed in", "✅".green());
    } else {
        let reason = context.session.error().await.unwrap_or_default();
        println!("{} {}", "❌ Sign-in failed:".red(), reason);
    }
}

pub async fn logout(context: &AppContext) {
    if context.session.logout().await {
        println!("{} Signed out", "👋".green());
    } else {
        let reason = context.session.error().await.unwrap_or_default();
        println!("{} {}", "❌ Sign-out failed:".red(), reason);
    }
}

pub async fn whoami(context: &AppContext) {
    let Some(outcome) = context.session.fetch_user_info().await else {
        println!("Not signed in");
        return;
    };

    announce("Operator", &outcome);
    let user = outcome.value();
    println!("   {} ({})", user.username.bold(), user.email);
    println!("   id: {}", user.id);
    if let Some(avatar) = &user.avatar {
        println!("   avatar: {}", avatar.dimmed());
    }
}
