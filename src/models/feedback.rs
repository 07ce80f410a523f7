use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::ArticleId;

/// Status value the server returns once feedback has been recorded
pub const STATUS_STORED: &str = "stored";

/// Wire value for a feedback target with no known article
pub const UNKNOWN_ARTICLE_IDX: i64 = -1;

/// Action recorded against an article
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackAction {
    Like,
}

impl Display for FeedbackAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackAction::Like => write!(f, "like"),
        }
    }
}

/// Article a feedback record refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTarget {
    Article(ArticleId),
    /// A recommendation that carried no index hint
    Unknown,
}

impl FeedbackTarget {
    pub fn wire_index(&self) -> i64 {
        match self {
            FeedbackTarget::Article(id) => id.0 as i64,
            FeedbackTarget::Unknown => UNKNOWN_ARTICLE_IDX,
        }
    }
}

impl Display for FeedbackTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackTarget::Article(id) => write!(f, "article {}", id),
            FeedbackTarget::Unknown => write!(f, "unknown article"),
        }
    }
}

/// Request body for the feedback endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRequest {
    pub user: String,
    pub article_idx: i64,
    pub action: FeedbackAction,
}

impl FeedbackRequest {
    pub fn new(user: impl Into<String>, target: FeedbackTarget, action: FeedbackAction) -> Self {
        Self {
            user: user.into(),
            article_idx: target.wire_index(),
            action,
        }
    }
}

/// Response body of the feedback endpoint
///
/// Error bodies (`{"error": "..."}`) deserialize with no status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeedbackResponse {
    #[serde(default)]
    pub status: Option<String>,
}

impl FeedbackResponse {
    pub fn is_stored(&self) -> bool {
        self.status.as_deref() == Some(STATUS_STORED)
    }
}

/// What became of a feedback submission
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackOutcome {
    /// The server answered `stored`
    Saved,
    /// The server answered, but with another status
    Rejected { status: Option<String> },
    /// The request or its response failed
    Failed(String),
}
