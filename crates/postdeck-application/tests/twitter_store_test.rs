mod common;

use chrono::{Duration, Utc};
use common::ScriptedRemote;
use postdeck_application::TwitterStore;
use postdeck_core::config::SimulatedDelays;
use postdeck_core::remote::HttpMethod;
use postdeck_core::twitter::{EngagementKind, TweetStats, TweetStatus};
use serde_json::json;
use std::sync::Arc;

fn store(remote: &Arc<ScriptedRemote>) -> TwitterStore {
    TwitterStore::new(remote.clone(), SimulatedDelays::none())
}

#[tokio::test]
async fn test_create_tweet_without_schedule_is_published_with_zeroed_stats() {
    let remote = ScriptedRemote::new();
    let store = store(&remote);

    let outcome = store.create_tweet("1", "hello", None, None).await;

    assert!(outcome.is_fallback());
    let tweet = outcome.into_value();
    assert_eq!(tweet.status, TweetStatus::Published);
    assert_eq!(tweet.stats, Some(TweetStats::default()));
    assert_eq!(tweet.content, "hello");
    assert_eq!(store.tweets().await, vec![tweet]);
}

#[tokio::test]
async fn test_create_tweet_with_schedule_is_scheduled_without_stats() {
    let remote = ScriptedRemote::new();
    let store = store(&remote);
    let when = Utc::now() + Duration::hours(3);

    let tweet = store
        .create_tweet("2", "later", Some(vec!["https://picsum.photos/1".into()]), Some(when))
        .await
        .into_value();

    assert_eq!(tweet.status, TweetStatus::Scheduled);
    assert_eq!(tweet.stats, None);
    assert_eq!(tweet.scheduled_for, Some(when));
    assert_eq!(tweet.account_id, "2");
}

#[tokio::test]
async fn test_locally_created_tweets_get_sequential_ids() {
    let remote = ScriptedRemote::new();
    let store = store(&remote);
    store.fetch_tweets().await;

    let tweet = store.create_tweet("1", "fourth", None, None).await.into_value();

    assert_eq!(tweet.id, "4");
    assert_eq!(store.tweets().await.len(), 4);
}

#[tokio::test]
async fn test_create_tweet_sends_camel_case_body() {
    let remote = ScriptedRemote::new();
    remote.respond_json(
        HttpMethod::Post,
        "/twitter/tweets",
        json!({
            "id": "t-100",
            "accountId": "1",
            "content": "hello",
            "status": "draft",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }),
    );
    let store = store(&remote);

    let outcome = store.create_tweet("1", "hello", None, None).await;

    assert!(outcome.is_live());
    assert_eq!(outcome.value().status, TweetStatus::Draft);
    let body = remote.sent_to("/twitter/tweets")[0].request.body.clone().unwrap();
    assert_eq!(body["accountId"], "1");
    assert!(body.get("scheduledFor").is_none());
}

#[tokio::test]
async fn test_fetch_fallbacks_populate_every_collection() {
    let remote = ScriptedRemote::new();
    let store = store(&remote);

    assert!(store.fetch_accounts().await.is_fallback());
    assert!(store.fetch_bot_accounts().await.is_fallback());
    assert!(store.fetch_tweets().await.is_fallback());
    assert!(store.fetch_automation_rules().await.is_fallback());
    assert!(store.fetch_strategies().await.is_fallback());

    let state = store.snapshot().await;
    assert_eq!(state.accounts.len(), 3);
    assert_eq!(state.bot_accounts.len(), 3);
    assert_eq!(state.tweets.len(), 3);
    assert_eq!(state.automation_rules.len(), 3);
    assert!(state.strategies.is_empty());
    assert_eq!(store.active_accounts().await.len(), 2);
    assert_eq!(store.active_bot_accounts().await.len(), 2);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_fetch_automation_rules_reads_type_field() {
    let remote = ScriptedRemote::new();
    remote.respond_json(
        HttpMethod::Get,
        "/twitter/automation-rules",
        json!([{
            "id": "r1",
            "accountId": "1",
            "type": "retweet",
            "criteria": { "hashtags": ["#rust"] },
            "action": { "rate": "high", "isActive": true },
            "createdAt": "2024-05-01T10:00:00Z"
        }]),
    );
    let store = store(&remote);

    let rules = store.fetch_automation_rules().await.into_value();

    assert_eq!(rules[0].kind, EngagementKind::Retweet);
    assert!(rules[0].action.is_active);
    assert_eq!(store.error().await, None);
}

#[tokio::test]
async fn test_fetch_strategies_keeps_results_absent_until_run() {
    let remote = ScriptedRemote::new();
    remote.respond_json(
        HttpMethod::Get,
        "/twitter/strategies",
        json!([{
            "id": "s1",
            "name": "Launch boost",
            "botAccountIds": ["bot1"],
            "targetType": "tweet",
            "targetId": "1",
            "actions": [{ "type": "like", "count": 20, "schedule": "immediate", "botIds": ["bot1"] }],
            "isActive": true,
            "status": "pending",
            "createdAt": "2024-05-01T10:00:00Z"
        }]),
    );
    let store = store(&remote);

    let strategies = store.fetch_strategies().await.into_value();

    assert_eq!(strategies.len(), 1);
    assert!(strategies[0].results.is_none());
    assert!(!strategies[0].show_results);
}

#[tokio::test]
async fn test_add_account_fallback_appends_active_account() {
    let remote = ScriptedRemote::new();
    let store = store(&remote);
    store.fetch_accounts().await;

    let outcome = store.add_account("new_handle", "token", "secret").await;

    assert!(outcome.is_fallback());
    let account = outcome.into_value();
    assert_eq!(account.id, "4");
    assert_eq!(account.username, "new_handle");
    assert!(account.is_active);
    assert_eq!(store.accounts().await.len(), 4);
    assert!(
        store
            .error()
            .await
            .is_some_and(|e| e.starts_with("Failed to add account"))
    );
}

#[tokio::test]
async fn test_add_account_sends_credentials() {
    let remote = ScriptedRemote::new();
    let store = store(&remote);

    store.add_account("handle", "tok", "sec").await;

    let body = remote.sent_to("/twitter/accounts")[0].request.body.clone().unwrap();
    assert_eq!(body["username"], "handle");
    assert_eq!(body["accessToken"], "tok");
    assert_eq!(body["accessSecret"], "sec");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_offline_creates_get_distinct_ids() {
    let remote = ScriptedRemote::new();
    let store = Arc::new(store(&remote));

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let tweet = store.create_tweet("1", &format!("tweet {i}"), None, None).await;
            let account = store.add_account(&format!("handle_{i}"), "tok", "sec").await;
            (tweet.into_value().id, account.into_value().id)
        }));
    }

    let mut tweet_ids = std::collections::HashSet::new();
    let mut account_ids = std::collections::HashSet::new();
    for handle in handles {
        let (tweet_id, account_id) = handle.await.unwrap();
        tweet_ids.insert(tweet_id);
        account_ids.insert(account_id);
    }

    assert_eq!(tweet_ids.len(), 16);
    assert_eq!(account_ids.len(), 16);
    assert_eq!(store.tweets().await.len(), 16);
}
