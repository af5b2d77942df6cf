use super::{announce, check};
use chrono::{DateTime, Utc};
use colored::Colorize;
use postdeck_application::AppContext;
use postdeck_core::twitter::{Tweet, TweetStatus};

pub async fn tweets(context: &AppContext) {
    let outcome = context.twitter.fetch_tweets().await;
    announce("Tweets", &outcome);
    for tweet in outcome.value() {
        print_tweet(tweet);
    }
}

pub async fn create_tweet(
    context: &AppContext,
    account_id: &str,
    content: &str,
    media_urls: Option<Vec<String>>,
    scheduled_for: Option<DateTime<Utc>>,
) {
    let outcome = context
        .twitter
        .create_tweet(account_id, content, media_urls, scheduled_for)
        .await;
    announce("Tweet created", &outcome);
    print_tweet(outcome.value());
}

fn print_tweet(tweet: &Tweet) {
    let label = tweet.status.to_string();
    let status = match tweet.status {
        TweetStatus::Published => label.as_str().green(),
        TweetStatus::Scheduled => label.as_str().cyan(),
        TweetStatus::Draft => label.as_str().dimmed(),
        TweetStatus::Failed => label.as_str().red(),
    };
    println!("  [{}] {:<9} account {}: {}", tweet.id, status, tweet.account_id, tweet.content);
    if let Some(when) = tweet.scheduled_for {
        println!("      scheduled for {}", when.to_rfc3339());
    }
    if let Some(stats) = &tweet.stats {
        println!(
            "      ♥ {}  ⟲ {}  💬 {}  👁 {}",
            stats.likes, stats.retweets, stats.replies, stats.impressions
        );
    }
}

pub async fn bots(context: &AppContext) {
    let outcome = context.twitter.fetch_bot_accounts().await;
    announce("Bot accounts", &outcome);
    for bot in outcome.value() {
        println!("  {} [{}] {}", check(bot.is_active), bot.id, bot.username);
    }
    let active = context.twitter.active_bot_accounts().await.len();
    println!("\n{active} active");
}

pub async fn rules(context: &AppContext) {
    let outcome = context.twitter.fetch_automation_rules().await;
    announce("Automation rules", &outcome);
    for rule in outcome.value() {
        let mut matchers = Vec::new();
        if let Some(keywords) = &rule.criteria.keywords {
            matchers.push(format!("keywords: {}", keywords.join(", ")));
        }
        if let Some(hashtags) = &rule.criteria.hashtags {
            matchers.push(format!("hashtags: {}", hashtags.join(" ")));
        }
        if let Some(users) = &rule.criteria.users {
            matchers.push(format!("users: {}", users.join(", ")));
        }
        println!(
            "  {} [{}] {:<8} rate {:<6} account {} ({})",
            check(rule.action.is_active),
            rule.id,
            rule.kind,
            rule.action.rate,
            rule.account_id,
            matchers.join("; ")
        );
        if let Some(template) = &rule.action.template {
            println!("      reply: {}", template.dimmed());
        }
    }
}

pub async fn strategies(context: &AppContext) {
    let outcome = context.twitter.fetch_strategies().await;
    announce("Strategies", &outcome);
    if outcome.value().is_empty() {
        println!("  (none)");
    }
    for strategy in outcome.value() {
        println!(
            "  {} [{}] {} -> {} {} ({})",
            check(strategy.is_active),
            strategy.id,
            strategy.name.bold(),
            strategy.target_type,
            strategy.target_id,
            strategy.status
        );
        for action in &strategy.actions {
            println!(
                "      {} x{} {} via {} bot(s)",
                action.kind,
                action.count,
                action.schedule,
                action.bot_ids.len()
            );
        }
        if let Some(results) = &strategy.results {
            println!(
                "      results: {} likes, {} retweets, {} replies, bot loss {:.1}%",
                results.likes,
                results.retweets,
                results.replies,
                results.total_bot_loss_rate * 100.0
            );
        }
    }
}
