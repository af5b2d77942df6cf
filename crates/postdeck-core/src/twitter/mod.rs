//! Twitter posting and automation domain module.
//!
//! Automation rules and strategies are read-only projections of backend
//! state; nothing here executes them.

mod model;

pub use model::{
    AutomationRule, BotAccount, EngagementKind, OperationStat, RateTier, RuleAction,
    RuleCriteria, Strategy, StrategyAction, StrategyResults, StrategyStatus, TargetType, Tweet,
    TweetStats, TweetStatus, TwitterAccount, active_bot_accounts, active_twitter_accounts,
};
