//! reqwest implementation of the recommendation server backend
//!
//! Endpoints:
//! 1. Feed: GET newline-delimited metadata file (status decides fallback)
//! 2. Article list: GET JSON array
//! 3. Recommend: POST `{article_idx, top_k}`
//! 4. Feedback: POST `{user, article_idx, action}`

use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        Article, FeedFetch, FeedbackRequest, FeedbackResponse, RecommendRequest,
        RecommendResponse,
    },
    services::backend::{
        request_id::{make_span_with_request_id, RequestId, REQUEST_ID_HEADER},
        ArticleBackend,
    },
};

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    feed_url: String,
    articles_url: String,
    recommend_url: String,
    feedback_url: String,
}

impl HttpBackend {
    /// Creates a backend for the server described by `config`
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            feed_url: config.endpoint(&config.articles_feed_path),
            articles_url: config.endpoint(&config.articles_api_path),
            recommend_url: config.endpoint(&config.recommend_path),
            feedback_url: config.endpoint(&config.feedback_path),
        })
    }

    /// Sends a request tagged with a fresh request id inside its own span
    async fn send(
        &self,
        method: Method,
        url: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> AppResult<Response> {
        let request_id = RequestId::new();
        let span = make_span_with_request_id(method.as_str(), url, &request_id);

        async {
            let request = self
                .http_client
                .request(method, url)
                .header(REQUEST_ID_HEADER, request_id.as_str());
            let response = build(request).send().await?;
            tracing::debug!(status = %response.status(), "Response received");
            Ok::<_, AppError>(response)
        }
        .instrument(span)
        .await
    }

    /// Turns an unsuccessful status into an `ExternalApi` error
    async fn ensure_success(response: Response, what: &str) -> AppResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::ExternalApi(format!(
            "{} returned status {}: {}",
            what, status, body
        )))
    }

    /// Reads the body as text and parses it, logging the raw body on failure
    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> AppResult<T> {
        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize {} response", what
            );
            AppError::Parse(format!("Failed to parse {} response: {}", what, e))
        })
    }
}

#[async_trait::async_trait]
impl ArticleBackend for HttpBackend {
    async fn fetch_feed(&self) -> AppResult<FeedFetch> {
        let response = self.send(Method::GET, &self.feed_url, |r| r).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::warn!(status, url = %self.feed_url, "Article feed unavailable");
            return Ok(FeedFetch::Unavailable(status));
        }

        Ok(FeedFetch::Body(response.text().await?))
    }

    async fn fetch_article_list(&self) -> AppResult<Vec<Article>> {
        let response = self.send(Method::GET, &self.articles_url, |r| r).await?;
        let response = Self::ensure_success(response, "Article list").await?;
        Self::read_json(response, "article list").await
    }

    async fn recommend(&self, request: &RecommendRequest) -> AppResult<RecommendResponse> {
        let response = self
            .send(Method::POST, &self.recommend_url, |r| r.json(request))
            .await?;

        // Error bodies such as `{"error": "invalid index"}` read as an empty result
        if !response.status().is_success() {
            tracing::warn!(
                status = %response.status(),
                article_idx = request.article_idx,
                "Recommend endpoint returned an error status"
            );
        }

        Self::read_json(response, "recommend").await
    }

    async fn send_feedback(&self, request: &FeedbackRequest) -> AppResult<FeedbackResponse> {
        let response = self
            .send(Method::POST, &self.feedback_url, |r| r.json(request))
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Feedback endpoint returned an error status");
        }

        Self::read_json(response, "feedback").await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
