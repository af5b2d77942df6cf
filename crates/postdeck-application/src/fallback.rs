//! Substitute data served when the backend is unavailable.
//!
//! Everything here is plausible sample content so the dashboard stays usable
//! offline. Timestamps are relative to the `now` passed in.

use chrono::{DateTime, Duration, Utc};
use minijinja::{Environment, context};
use postdeck_core::account::{Platform, SocialAccount};
use postdeck_core::content::{CommentType, ContentEvaluation, WordReplacement};
use postdeck_core::twitter::{
    AutomationRule, BotAccount, EngagementKind, RateTier, RuleAction, RuleCriteria, Tweet,
    TweetStats, TweetStatus, TwitterAccount,
};
use postdeck_core::user::User;
use rand::Rng;
use rand::seq::SliceRandom;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/64";
pub const ADMIN_EMAIL: &str = "admin@cuc.edu.cn";
const ADMIN_AVATAR: &str = "https://randomuser.me/api/portraits/women/68.jpg";
const TOKEN_PREFIX: &str = "mock_jwt_token_";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// ============================================================================
// Accounts and content
// ============================================================================

/// One connected Twitter account and one disconnected Facebook page.
pub fn social_accounts(now: DateTime<Utc>) -> Vec<SocialAccount> {
    vec![
        SocialAccount {
            id: "1".to_string(),
            platform: Platform::Twitter,
            username: "example_user".to_string(),
            display_name: "Example User".to_string(),
            profile_image: PLACEHOLDER_IMAGE.to_string(),
            is_connected: true,
            follower_count: 1250,
            following_count: 890,
            posts_count: 456,
            last_synced_at: now,
            access_token: None,
            refresh_token: None,
        },
        SocialAccount {
            id: "2".to_string(),
            platform: Platform::Facebook,
            username: "example_page".to_string(),
            display_name: "Example Page".to_string(),
            profile_image: PLACEHOLDER_IMAGE.to_string(),
            is_connected: false,
            follower_count: 3200,
            following_count: 120,
            posts_count: 234,
            last_synced_at: now - Duration::days(1),
            access_token: None,
            refresh_token: None,
        },
    ]
}

/// Per-platform sample posts rendered around a topic.
pub struct ContentTemplates {
    env: Environment<'static>,
}

impl ContentTemplates {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("hashtag", hashtag);
        for (name, source) in [
            ("twitter", TWITTER_TEMPLATE),
            ("facebook", FACEBOOK_TEMPLATE),
            ("instagram", INSTAGRAM_TEMPLATE),
            ("linkedin", LINKEDIN_TEMPLATE),
        ] {
            if let Err(err) = env.add_template(name, source) {
                tracing::error!(template = name, error = %err, "Invalid content template");
            }
        }
        Self { env }
    }

    /// Renders the sample for `platform`; unknown platforms get the Twitter one.
    pub fn render(&self, platform: &str, topic: &str) -> String {
        let name = if self.env.get_template(platform).is_ok() {
            platform
        } else {
            "twitter"
        };

        self.env
            .get_template(name)
            .and_then(|template| template.render(context! { topic => topic }))
            .unwrap_or_else(|err| {
                tracing::error!(template = name, error = %err, "Failed to render content template");
                format!("{topic} {}", hashtag(topic))
            })
    }
}

impl Default for ContentTemplates {
    fn default() -> Self {
        Self::new()
    }
}

fn hashtag(value: &str) -> String {
    let tag: String = value.split_whitespace().collect();
    format!("#{tag}")
}

const TWITTER_TEMPLATE: &str = "🚀 Exploring the endless possibilities of {{ topic }}! In a fast-changing world we need to keep learning and stay curious. {{ topic | hashtag }} #innovation";
const FACEBOOK_TEMPLATE: &str = "Today I'd like to share a few thoughts on {{ topic }}. It shapes our everyday lives and the direction we are heading in. Let's talk about it!";
const INSTAGRAM_TEMPLATE: &str = "✨ A moment of inspiration from {{ topic }} ✨\n\nEvery exploration is a chance to grow, every discovery is worth celebrating.\n\n{{ topic | hashtag }} #inspiration #growth";
const LINKEDIN_TEMPLATE: &str = "Across our industry, {{ topic }} is reshaping how we work. As practitioners we should embrace the change and look for the opportunities it brings.";

/// Fixed sample comment for each comment type.
pub fn comment(comment_type: CommentType) -> String {
    match comment_type {
        CommentType::Supportive => {
            "Completely agree with this! The topic really deserves a closer look. Looking forward to more. 👍"
        }
        CommentType::Questioning => {
            "Interesting angle. What challenges do you expect when applying this in practice?"
        }
        CommentType::Informative => {
            "Worth adding: recent research shows this field is moving fast, so it pays to follow the latest work."
        }
        CommentType::Engaging => {
            "Love this! It reminds me of something that happened to me once... anyone had a similar experience? 💬"
        }
    }
    .to_string()
}

/// A randomized evaluation.
///
/// Score ranges: cultural fit 70-99, virality 60-99, engagement 65-99,
/// sentiment 75-99. No risk factors are ever reported.
pub fn evaluation<R: Rng + ?Sized>(rng: &mut R) -> ContentEvaluation {
    ContentEvaluation {
        cultural_fit_score: rng.gen_range(70..100),
        virality_score: rng.gen_range(60..100),
        engagement_score: rng.gen_range(65..100),
        sentiment_score: rng.gen_range(75..100),
        suggestions: vec![
            "Use more emotionally expressive wording to lift engagement".to_string(),
            "Consider adding a currently trending hashtag".to_string(),
            "Ask a question to invite replies".to_string(),
            "Add an emoji or two where it fits naturally".to_string(),
        ],
        word_replacements: vec![
            replacement("think", "reflect deeply", "Stronger expression"),
            replacement("growth", "rapid growth", "More compelling"),
            replacement("chance", "golden opportunity", "More attractive"),
        ],
        overall_feedback: "Solid content with reasonable reach potential. Adding interactive elements and a bit more emotion should improve engagement.".to_string(),
        risk_factors: Vec::new(),
        recommended_tags: vec![
            "#innovation".to_string(),
            "#ideas".to_string(),
            "#sharing".to_string(),
            "#growth".to_string(),
        ],
    }
}

fn replacement(original: &str, suggested: &str, reason: &str) -> WordReplacement {
    WordReplacement {
        original: original.to_string(),
        suggested: suggested.to_string(),
        reason: reason.to_string(),
    }
}

// ============================================================================
// Twitter
// ============================================================================

pub fn twitter_accounts(now: DateTime<Utc>) -> Vec<TwitterAccount> {
    let account = |id: &str,
                   username: &str,
                   image: &str,
                   is_active: bool,
                   followers: u64,
                   following: u64,
                   tweets: u64| {
        TwitterAccount {
            id: id.to_string(),
            username: username.to_string(),
            profile_image: image.to_string(),
            is_active,
            follower_count: followers,
            following_count: following,
            tweet_count: tweets,
            last_synced_at: now,
        }
    };

    vec![
        account(
            "1",
            "Postdeck_Official",
            "https://randomuser.me/api/portraits/men/32.jpg",
            true,
            12500,
            450,
            2340,
        ),
        account(
            "2",
            "Postdeck_MediaLab",
            "https://randomuser.me/api/portraits/women/44.jpg",
            true,
            8720,
            980,
            1870,
        ),
        account(
            "3",
            "Postdeck_Research",
            "https://randomuser.me/api/portraits/men/67.jpg",
            false,
            5230,
            342,
            920,
        ),
    ]
}

pub fn bot_accounts() -> Vec<BotAccount> {
    [("bot1", "Bot1", true), ("bot2", "Bot2", true), ("bot3", "Bot3", false)]
        .into_iter()
        .map(|(id, username, is_active)| BotAccount {
            id: id.to_string(),
            username: username.to_string(),
            is_active,
        })
        .collect()
}

/// A freshly linked account with randomized metrics.
pub fn new_twitter_account<R: Rng + ?Sized>(
    id: String,
    username: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> TwitterAccount {
    TwitterAccount {
        id,
        username: username.to_string(),
        profile_image: format!(
            "https://randomuser.me/api/portraits/men/{}.jpg",
            rng.gen_range(0..100)
        ),
        is_active: true,
        follower_count: rng.gen_range(0..10_000),
        following_count: rng.gen_range(0..1_000),
        tweet_count: rng.gen_range(0..3_000),
        last_synced_at: now,
    }
}

pub fn tweets(now: DateTime<Utc>) -> Vec<Tweet> {
    let day_ago = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);

    vec![
        Tweet {
            id: "1".to_string(),
            account_id: "1".to_string(),
            content: "We are excited to announce our new media research lab opening next month! #MediaInnovation".to_string(),
            media_urls: None,
            scheduled_for: None,
            status: TweetStatus::Published,
            created_at: day_ago,
            updated_at: day_ago,
            stats: Some(TweetStats {
                likes: 145,
                retweets: 32,
                replies: 12,
                impressions: 2800,
            }),
        },
        Tweet {
            id: "2".to_string(),
            account_id: "1".to_string(),
            content: "Join us this Saturday for the annual media showcase where our students will present their latest projects! #Showcase".to_string(),
            media_urls: Some(vec!["https://picsum.photos/500/300".to_string()]),
            scheduled_for: Some(now + Duration::days(1)),
            status: TweetStatus::Scheduled,
            created_at: now,
            updated_at: now,
            stats: None,
        },
        Tweet {
            id: "3".to_string(),
            account_id: "2".to_string(),
            content: "Our research team has published a new paper on social media engagement strategies in the digital age.".to_string(),
            media_urls: None,
            scheduled_for: None,
            status: TweetStatus::Published,
            created_at: two_days_ago,
            updated_at: two_days_ago,
            stats: Some(TweetStats {
                likes: 98,
                retweets: 25,
                replies: 5,
                impressions: 1900,
            }),
        },
    ]
}

/// Builds a tweet locally. A schedule time makes it `Scheduled` without
/// stats; otherwise it is `Published` with zeroed stats.
pub fn new_tweet(
    id: String,
    account_id: &str,
    content: &str,
    media_urls: Option<Vec<String>>,
    scheduled_for: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Tweet {
    let (status, stats) = match scheduled_for {
        Some(_) => (TweetStatus::Scheduled, None),
        None => (TweetStatus::Published, Some(TweetStats::default())),
    };

    Tweet {
        id,
        account_id: account_id.to_string(),
        content: content.to_string(),
        media_urls,
        scheduled_for,
        status,
        created_at: now,
        updated_at: now,
        stats,
    }
}

pub fn automation_rules(now: DateTime<Utc>) -> Vec<AutomationRule> {
    let strings = |items: &[&str]| Some(items.iter().map(|s| s.to_string()).collect());

    vec![
        AutomationRule {
            id: "1".to_string(),
            account_id: "1".to_string(),
            kind: EngagementKind::Like,
            criteria: RuleCriteria {
                keywords: strings(&["media", "communication", "journalism"]),
                users: None,
                hashtags: strings(&["#MediaStudies", "#Journalism"]),
            },
            action: RuleAction {
                template: None,
                rate: RateTier::Medium,
                is_active: true,
            },
            created_at: now - Duration::days(1),
        },
        AutomationRule {
            id: "2".to_string(),
            account_id: "1".to_string(),
            kind: EngagementKind::Retweet,
            criteria: RuleCriteria {
                keywords: None,
                users: strings(&["@MediaStudies", "@JournalismDaily"]),
                hashtags: strings(&["#MediaInnovation"]),
            },
            action: RuleAction {
                template: None,
                rate: RateTier::Low,
                is_active: true,
            },
            created_at: now - Duration::days(2),
        },
        AutomationRule {
            id: "3".to_string(),
            account_id: "2".to_string(),
            kind: EngagementKind::Reply,
            criteria: RuleCriteria {
                keywords: strings(&["research", "media lab"]),
                users: None,
                hashtags: None,
            },
            action: RuleAction {
                template: Some(
                    "Thank you for mentioning our research! Feel free to check out more at our website."
                        .to_string(),
                ),
                rate: RateTier::Low,
                is_active: false,
            },
            created_at: now - Duration::days(3),
        },
    ]
}

// ============================================================================
// Session
// ============================================================================

/// The fixed operator identity.
pub fn admin_user(email: &str) -> User {
    User {
        id: "1".to_string(),
        username: "admin".to_string(),
        email: email.to_string(),
        avatar: Some(ADMIN_AVATAR.to_string()),
    }
}

/// A fabricated bearer token: `mock_jwt_token_` plus eleven base-36 chars.
pub fn issue_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..11)
        .filter_map(|_| BASE36.choose(&mut *rng).map(|&b| b as char))
        .collect();
    format!("{TOKEN_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_evaluation_scores_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let eval = evaluation(&mut rng);
            assert!((70..=99).contains(&eval.cultural_fit_score));
            assert!((60..=99).contains(&eval.virality_score));
            assert!((65..=99).contains(&eval.engagement_score));
            assert!((75..=99).contains(&eval.sentiment_score));
            assert!(eval.risk_factors.is_empty());
        }
    }

    #[test]
    fn test_templates_render_topic() {
        let templates = ContentTemplates::new();

        let instagram = templates.render("instagram", "open source");
        assert!(instagram.contains("open source"));
        assert!(instagram.contains("#opensource"));

        let linkedin = templates.render("linkedin", "remote work");
        assert!(linkedin.starts_with("Across our industry, remote work"));
    }

    #[test]
    fn test_unknown_platform_uses_twitter_template() {
        let templates = ContentTemplates::new();
        assert_eq!(
            templates.render("mastodon", "rust"),
            templates.render("twitter", "rust")
        );
    }

    #[test]
    fn test_new_tweet_status_follows_schedule() {
        let now = Utc::now();
        let published = new_tweet("1".into(), "1", "hello", None, None, now);
        assert_eq!(published.status, TweetStatus::Published);
        assert_eq!(published.stats, Some(TweetStats::default()));

        let scheduled = new_tweet(
            "2".into(),
            "1",
            "later",
            None,
            Some(now + Duration::hours(3)),
            now,
        );
        assert_eq!(scheduled.status, TweetStatus::Scheduled);
        assert!(scheduled.stats.is_none());
    }

    #[test]
    fn test_issue_token_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let token = issue_token(&mut rng);
        let suffix = token.strip_prefix(TOKEN_PREFIX).unwrap();
        assert_eq!(suffix.len(), 11);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
        assert_ne!(token, issue_token(&mut rng));
    }

    #[test]
    fn test_sample_accounts_shape() {
        let now = Utc::now();
        let accounts = social_accounts(now);
        assert_eq!(accounts.len(), 2);
        assert!(accounts[0].is_connected);
        assert!(!accounts[1].is_connected);
        assert_eq!(accounts[1].last_synced_at, now - Duration::days(1));
    }
}
