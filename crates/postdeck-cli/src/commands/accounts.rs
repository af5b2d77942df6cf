use super::{announce, check};
use anyhow::{Context, Result};
use colored::Colorize;
use postdeck_application::AppContext;
use postdeck_core::account::SocialAccount;

pub async fn list(context: &AppContext, grouped: bool) {
    let outcome = context.social_media.fetch_accounts().await;
    announce("Accounts", &outcome);

    if grouped {
        for group in context.social_media.accounts_by_platform().await {
            println!("\n{}", group.platform.to_string().as_str().cyan().bold());
            for account in &group.accounts {
                print_account(account);
            }
        }
    } else {
        for account in outcome.value() {
            print_account(account);
        }
    }

    let connected = context.social_media.connected_accounts().await.len();
    println!("\n{connected}/{} connected", outcome.value().len());
}

fn print_account(account: &SocialAccount) {
    println!(
        "  {} [{}] {:<10} @{:<20} {} followers, {} posts",
        check(account.is_connected),
        account.id,
        account.platform.as_ref(),
        account.username,
        account.follower_count,
        account.posts_count
    );
}

pub async fn connect(context: &AppContext, platform: &str, credentials: &str) -> Result<()> {
    let credentials: serde_json::Value =
        serde_json::from_str(credentials).context("Credentials must be a JSON object")?;

    let outcome = context.social_media.connect_account(platform, credentials).await;
    if *outcome.value() {
        println!("{} Connected {}", "✅".green(), platform.cyan());
    } else {
        let reason = outcome.error().map(|e| e.to_string()).unwrap_or_default();
        println!("{} Could not connect {}: {}", "❌".red(), platform, reason);
    }
    Ok(())
}

pub async fn disconnect(context: &AppContext, account_id: &str) {
    // Each run starts with an empty collection; load it so the id can be found.
    context.social_media.fetch_accounts().await;
    let known = context
        .social_media
        .accounts()
        .await
        .iter()
        .any(|account| account.id == account_id);

    let outcome = context.social_media.disconnect_account(account_id).await;
    announce("Disconnect", &outcome);

    println!("   {}", disconnect_note(account_id, known, outcome.is_live()));
}

fn disconnect_note(account_id: &str, known: bool, confirmed: bool) -> String {
    match (known, confirmed) {
        (false, _) => format!("no account with id {account_id}"),
        (true, true) => format!("{account_id} marked disconnected"),
        (true, false) => format!("{account_id} still connected, the backend did not confirm"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnect_note_distinguishes_unknown_ids() {
        assert_eq!(disconnect_note("42", false, true), "no account with id 42");
        assert_eq!(disconnect_note("42", false, false), "no account with id 42");
        assert_eq!(disconnect_note("1", true, true), "1 marked disconnected");
        assert_eq!(
            disconnect_note("1", true, false),
            "1 still connected, the backend did not confirm"
        );
    }
}
