//! Content generation, evaluation and publishing domain module.

mod model;

pub use model::{
    CommentGenerationRequest, CommentTone, CommentType, ContentEvaluation,
    ContentGenerationRequest, ContentLength, ContentTone, PublishRequest, WordReplacement,
    SCORE_MAX,
};
