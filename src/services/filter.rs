use crate::models::{ArticleId, LoadedArticle};

/// A submitted search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterQuery {
    /// Blank query: reload the full collection from the server
    Reload,
    /// Lowercased, trimmed needle
    Match(String),
}

impl FilterQuery {
    pub fn parse(raw: &str) -> Self {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            FilterQuery::Reload
        } else {
            FilterQuery::Match(needle)
        }
    }
}

/// Ids of the articles whose title or summary contains `needle`
///
/// `needle` must already be lowercased. Order follows the collection.
pub fn matching_ids(articles: &[LoadedArticle], needle: &str) -> Vec<ArticleId> {
    articles
        .iter()
        .filter(|loaded| loaded.article.search_text().contains(needle))
        .map(|loaded| loaded.id)
        .collect()
}
