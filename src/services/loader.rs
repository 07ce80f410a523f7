use crate::{
    error::{AppError, AppResult},
    models::{Article, ArticleId, ArticleSource, FeedFetch, LoadedArticle},
    services::backend::ArticleBackend,
};

/// A freshly loaded article collection
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCollection {
    pub articles: Vec<LoadedArticle>,
    pub source: ArticleSource,
}

/// Parses a newline-delimited JSON body, one article per non-empty line
///
/// A single malformed line fails the whole body.
pub fn parse_feed(text: &str) -> AppResult<Vec<Article>> {
    text.trim()
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| {
            serde_json::from_str::<Article>(line).map_err(|e| {
                AppError::Parse(format!("Invalid article on feed line {}: {}", n + 1, e))
            })
        })
        .collect()
}

/// Assigns stable ids in the order the articles were served
pub fn assign_ids(articles: Vec<Article>) -> Vec<LoadedArticle> {
    articles
        .into_iter()
        .enumerate()
        .map(|(i, article)| LoadedArticle {
            id: ArticleId(i),
            article,
        })
        .collect()
}

/// Loads the article collection
///
/// Tries the feed first and falls back to the article list endpoint only when
/// the feed answers with an unsuccessful status. Transport errors on the feed
/// and malformed feed bodies fail the load without consulting the fallback.
pub async fn load_articles(backend: &dyn ArticleBackend) -> AppResult<LoadedCollection> {
    let (articles, source) = match backend.fetch_feed().await? {
        FeedFetch::Body(text) => (parse_feed(&text)?, ArticleSource::Feed),
        FeedFetch::Unavailable(status) => {
            tracing::info!(status, backend = backend.name(), "Falling back to article list endpoint");
            let articles = backend.fetch_article_list().await.map_err(|e| {
                AppError::ExternalApi(format!(
                    "Unable to load articles (feed status {}): {}",
                    status, e
                ))
            })?;
            (articles, ArticleSource::Api)
        }
    };

    tracing::info!(
        count = articles.len(),
        source = %source,
        backend = backend.name(),
        "Articles loaded"
    );

    Ok(LoadedCollection {
        articles: assign_ids(articles),
        source,
    })
}
