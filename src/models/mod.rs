pub mod article;
pub mod feedback;
pub mod recommendation;

pub use article::{Article, ArticleId, ArticleSource, FeedFetch, LoadedArticle};
pub use feedback::{
    FeedbackAction, FeedbackOutcome, FeedbackRequest, FeedbackResponse, FeedbackTarget,
    STATUS_STORED, UNKNOWN_ARTICLE_IDX,
};
pub use recommendation::{RecommendRequest, RecommendResponse, RecommendationItem};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_deserialization_with_missing_fields() {
        let json = r#"{"title": "Rates rise again", "url": "https://news.example/rates"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title.as_deref(), Some("Rates rise again"));
        assert_eq!(article.source, None);
        assert_eq!(article.summary, None);
        assert_eq!(article.display_link(), Some("https://news.example/rates"));
    }

    #[test]
    fn test_article_ignores_unknown_fields_and_nulls() {
        let json = r#"{"title": null, "link": "https://a.example", "published": "2024-01-01", "tags": [1, 2]}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, None);
        assert_eq!(article.display_link(), Some("https://a.example"));
    }

    #[test]
    fn test_article_link_preferred_over_url() {
        let article = Article {
            link: Some("https://link.example".to_string()),
            url: Some("https://url.example".to_string()),
            ..Default::default()
        };
        assert_eq!(article.display_link(), Some("https://link.example"));
    }

    #[test]
    fn test_article_search_text() {
        let article = Article {
            title: Some("Football Results".to_string()),
            summary: Some("League TABLE".to_string()),
            ..Default::default()
        };
        assert_eq!(article.search_text(), "football results league table");

        let untitled = Article {
            summary: Some("Only Summary".to_string()),
            ..Default::default()
        };
        assert_eq!(untitled.search_text(), " only summary");
    }

    #[test]
    fn test_recommend_request_serialization() {
        let request = RecommendRequest::new(ArticleId(4), 6);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"article_idx": 4, "top_k": 6}));
    }

    #[test]
    fn test_recommend_response_missing_list_is_empty() {
        let response: RecommendResponse = serde_json::from_str(r#"{"error": "invalid index"}"#).unwrap();
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_recommendation_item_index_hint() {
        let json = r#"{"title": "Similar", "url": "https://s.example", "_idx": 12}"#;
        let item: RecommendationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.idx, Some(12));
        assert_eq!(item.feedback_target(), FeedbackTarget::Article(ArticleId(12)));

        let bare: RecommendationItem = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
        assert_eq!(bare.feedback_target(), FeedbackTarget::Unknown);

        let negative = RecommendationItem {
            idx: Some(-1),
            ..Default::default()
        };
        assert_eq!(negative.feedback_target(), FeedbackTarget::Unknown);
    }

    #[test]
    fn test_feedback_request_serialization() {
        let request = FeedbackRequest::new("demo_user", FeedbackTarget::Unknown, FeedbackAction::Like);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"user": "demo_user", "article_idx": -1, "action": "like"})
        );

        let request = FeedbackRequest::new(
            "demo_user",
            FeedbackTarget::Article(ArticleId(3)),
            FeedbackAction::Like,
        );
        assert_eq!(request.article_idx, 3);
    }

    #[test]
    fn test_feedback_response_status() {
        let stored: FeedbackResponse = serde_json::from_str(r#"{"status": "stored"}"#).unwrap();
        assert!(stored.is_stored());

        let other: FeedbackResponse = serde_json::from_str(r#"{"status": "queued"}"#).unwrap();
        assert!(!other.is_stored());

        let error: FeedbackResponse =
            serde_json::from_str(r#"{"error": "mongodb not connected"}"#).unwrap();
        assert_eq!(error.status, None);
        assert!(!error.is_stored());
    }
}
