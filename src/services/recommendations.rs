use crate::{
    error::AppResult,
    models::{ArticleId, RecommendRequest, RecommendationItem},
    services::backend::ArticleBackend,
};

/// Fetches up to `top_k` articles similar to `id`
///
/// The server may return fewer; a response without a list counts as empty.
pub async fn fetch_recommendations(
    backend: &dyn ArticleBackend,
    id: ArticleId,
    top_k: usize,
) -> AppResult<Vec<RecommendationItem>> {
    let request = RecommendRequest::new(id, top_k);
    let response = backend.recommend(&request).await?;

    tracing::info!(
        article_id = %id,
        results = response.recommendations.len(),
        backend = backend.name(),
        "Recommendations fetched"
    );

    Ok(response.recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::RecommendResponse;
    use crate::services::backend::MockArticleBackend;

    #[tokio::test]
    async fn test_sends_article_id_and_top_k() {
        let mut backend = MockArticleBackend::new();
        backend.expect_name().return_const("mock");
        backend
            .expect_recommend()
            .withf(|req| req.article_idx == 7 && req.top_k == 6)
            .times(1)
            .returning(|_| {
                Ok(RecommendResponse {
                    recommendations: vec![RecommendationItem {
                        title: Some("Close match".to_string()),
                        ..Default::default()
                    }],
                })
            });

        let items = fetch_recommendations(&backend, ArticleId(7), 6).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Close match"));
    }

    #[tokio::test]
    async fn test_propagates_backend_errors() {
        let mut backend = MockArticleBackend::new();
        backend.expect_name().return_const("mock");
        backend
            .expect_recommend()
            .returning(|_| Err(AppError::Parse("expected value".to_string())));

        let result = fetch_recommendations(&backend, ArticleId(0), 6).await;
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
