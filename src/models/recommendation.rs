use serde::{Deserialize, Serialize};

use super::{ArticleId, FeedbackTarget};

/// Request body for the similar-articles endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendRequest {
    pub article_idx: usize,
    pub top_k: usize,
}

impl RecommendRequest {
    pub fn new(id: ArticleId, top_k: usize) -> Self {
        Self {
            article_idx: id.0,
            top_k,
        }
    }
}

/// Response body of the similar-articles endpoint
///
/// A body without `recommendations` is treated as an empty result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Vec<RecommendationItem>,
}

/// A server-returned article deemed similar to the selected one
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Collection index hint, when the server provides one
    #[serde(rename = "_idx", default, skip_serializing_if = "Option::is_none")]
    pub idx: Option<i64>,
}

impl RecommendationItem {
    /// Target for a like on this recommendation
    pub fn feedback_target(&self) -> FeedbackTarget {
        match self.idx {
            Some(idx) if idx >= 0 => FeedbackTarget::Article(ArticleId(idx as usize)),
            _ => FeedbackTarget::Unknown,
        }
    }
}
