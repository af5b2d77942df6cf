//! Request and result shapes for the content endpoints.

use crate::error::{DashboardError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Upper bound of every evaluation score.
pub const SCORE_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentTone {
    Professional,
    Casual,
    Humorous,
    Inspiring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

/// Body of `POST /content/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGenerationRequest {
    pub topic: String,
    /// Free-form platform key; unknown platforms are passed through.
    pub platform: String,
    pub tone: ContentTone,
    pub length: ContentLength,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CommentType {
    Supportive,
    Questioning,
    Informative,
    Engaging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CommentTone {
    Friendly,
    Professional,
    Witty,
}

/// Body of `POST /comment/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentGenerationRequest {
    pub original_post: String,
    pub comment_type: CommentType,
    pub tone: CommentTone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// A suggested substitution of one word or phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReplacement {
    pub original: String,
    pub suggested: String,
    pub reason: String,
}

/// Scored review of a piece of content.
///
/// Scores are in `0..=100`. Only the latest evaluation is kept by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEvaluation {
    pub cultural_fit_score: u8,
    pub virality_score: u8,
    pub engagement_score: u8,
    pub sentiment_score: u8,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub word_replacements: Vec<WordReplacement>,
    #[serde(default)]
    pub overall_feedback: String,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub recommended_tags: Vec<String>,
}

impl ContentEvaluation {
    /// The four scores in a fixed order: cultural fit, virality, engagement, sentiment.
    pub fn scores(&self) -> [u8; 4] {
        [
            self.cultural_fit_score,
            self.virality_score,
            self.engagement_score,
            self.sentiment_score,
        ]
    }

    /// Rejects an evaluation whose scores exceed [`SCORE_MAX`].
    pub fn within_bounds(self) -> Result<Self> {
        match self.scores().into_iter().find(|score| *score > SCORE_MAX) {
            Some(score) => Err(DashboardError::decode(format!(
                "evaluation score {score} exceeds {SCORE_MAX}"
            ))),
            None => Ok(self),
        }
    }
}

/// Body of `POST /content/publish`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub content: String,
    /// Account ids to publish to.
    pub accounts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_omits_absent_fields() {
        let request = ContentGenerationRequest {
            topic: "rust".to_string(),
            platform: "twitter".to_string(),
            tone: ContentTone::Casual,
            length: ContentLength::Short,
            keywords: None,
            target_audience: Some("developers".to_string()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tone"], "casual");
        assert_eq!(value["targetAudience"], "developers");
        assert!(value.get("keywords").is_none());
    }

    #[test]
    fn test_evaluation_defaults_missing_lists() {
        let json = r#"{
            "culturalFitScore": 80,
            "viralityScore": 61,
            "engagementScore": 70,
            "sentimentScore": 90
        }"#;
        let evaluation: ContentEvaluation = serde_json::from_str(json).unwrap();
        assert_eq!(evaluation.scores(), [80, 61, 70, 90]);
        assert!(evaluation.risk_factors.is_empty());
    }

    #[test]
    fn test_out_of_range_score_is_a_decode_error() {
        let json = r#"{
            "culturalFitScore": 100,
            "viralityScore": 101,
            "engagementScore": 0,
            "sentimentScore": 50
        }"#;
        let evaluation: ContentEvaluation = serde_json::from_str(json).unwrap();
        let err = evaluation.within_bounds().unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_comment_request_wire_names() {
        let request = CommentGenerationRequest {
            original_post: "hello".to_string(),
            comment_type: CommentType::Engaging,
            tone: CommentTone::Witty,
            context: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["originalPost"], "hello");
        assert_eq!(value["commentType"], "engaging");
    }
}
