use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stable identifier assigned to an article when the collection is loaded
///
/// Equal to the article's position in the collection as served, which is also
/// how the server addresses it. Filtering never renumbers ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleId(pub usize);

impl Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Article metadata as served by the recommendation server
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Canonical URL; the metadata file carries this alongside or instead of `link`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Article {
    /// Link shown on the article card
    pub fn display_link(&self) -> Option<&str> {
        self.link.as_deref().or(self.url.as_deref())
    }

    /// Lowercased `title + " " + summary`, the text a search query is matched against
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or_default(),
            self.summary.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

/// An article together with the id it was assigned at load time
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedArticle {
    pub id: ArticleId,
    pub article: Article,
}

/// Which endpoint served a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSource {
    /// Newline-delimited metadata file
    Feed,
    /// JSON array endpoint, used when the feed is unavailable
    Api,
}

impl Display for ArticleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleSource::Feed => write!(f, "feed"),
            ArticleSource::Api => write!(f, "api"),
        }
    }
}

/// Result of a primary (feed) fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FeedFetch {
    /// Successful status; the raw newline-delimited body
    Body(String),
    /// Unsuccessful status; the fallback endpoint should be tried
    Unavailable(u16),
}
