//! Recommendation server abstraction
//!
//! The client talks to exactly one server, but every operation goes through
//! this trait so the loader, requester and recorder can be exercised against a
//! mock without a network.

use crate::{
    error::AppResult,
    models::{
        Article, FeedFetch, FeedbackRequest, FeedbackResponse, RecommendRequest,
        RecommendResponse,
    },
};

pub mod http;
pub mod request_id;

pub use http::HttpBackend;

/// Trait for recommendation server backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ArticleBackend: Send + Sync {
    /// Fetch the newline-delimited article feed
    ///
    /// An unsuccessful status is not an error: it is reported as
    /// `FeedFetch::Unavailable` so the caller can fall back to the article list.
    async fn fetch_feed(&self) -> AppResult<FeedFetch>;

    /// Fetch the article collection as a JSON array
    async fn fetch_article_list(&self) -> AppResult<Vec<Article>>;

    /// Ask for articles similar to `request.article_idx`
    ///
    /// As with feedback, a JSON body is returned whatever the status; a body
    /// without `recommendations` is an empty result.
    async fn recommend(&self, request: &RecommendRequest) -> AppResult<RecommendResponse>;

    /// Record a feedback action
    ///
    /// Any JSON body is returned, whatever the status; deciding whether it
    /// means success is up to the caller.
    async fn send_feedback(&self, request: &FeedbackRequest) -> AppResult<FeedbackResponse>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}
