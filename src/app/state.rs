use chrono::{DateTime, Utc};

use crate::{
    models::{ArticleId, LoadedArticle, RecommendationItem},
    services::{filter, LoadedCollection},
};

/// Lifecycle of the article panel
#[derive(Debug, Clone, PartialEq)]
pub enum ArticlesStatus {
    /// No load has completed yet
    NotLoaded,
    Ready,
    /// The last load failed; no collection is shown
    Failed(String),
}

/// Recommendation panel contents
///
/// Hidden until the first result arrives. The title is set as soon as a
/// request is issued; the items only when its response is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationPanel {
    pub title: Option<String>,
    pub items: Option<Vec<RecommendationItem>>,
}

impl RecommendationPanel {
    pub fn is_visible(&self) -> bool {
        self.items.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A user-visible confirmation or failure message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Client state for one session
///
/// Owned by the `App`; the load and filter paths are the only writers of the
/// collection and the visible list.
#[derive(Debug)]
pub struct AppState {
    articles: Vec<LoadedArticle>,
    /// Ids currently displayed, in collection order
    visible: Vec<ArticleId>,
    status: ArticlesStatus,
    recommendations: RecommendationPanel,
    notices: Vec<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty state with nothing loaded
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            visible: Vec::new(),
            status: ArticlesStatus::NotLoaded,
            recommendations: RecommendationPanel::default(),
            notices: Vec::new(),
        }
    }

    pub fn status(&self) -> &ArticlesStatus {
        &self.status
    }

    /// Looks up an article of the loaded collection
    pub fn article(&self, id: ArticleId) -> Option<&LoadedArticle> {
        self.articles.get(id.0).filter(|loaded| loaded.id == id)
    }

    /// Articles currently displayed
    pub fn visible_articles(&self) -> impl Iterator<Item = &LoadedArticle> + '_ {
        self.visible.iter().filter_map(|id| self.article(*id))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn count_label(&self) -> String {
        format!("{} articles loaded", self.visible.len())
    }

    pub fn recommendations(&self) -> &RecommendationPanel {
        &self.recommendations
    }

    /// The n-th displayed recommendation
    pub fn recommendation(&self, position: usize) -> Option<&RecommendationItem> {
        self.recommendations
            .items
            .as_ref()
            .and_then(|items| items.get(position))
    }

    /// Replaces the collection wholesale and shows all of it
    pub fn replace_collection(&mut self, collection: LoadedCollection) {
        self.visible = collection.articles.iter().map(|a| a.id).collect();
        self.articles = collection.articles;
        self.status = ArticlesStatus::Ready;
    }

    /// Drops the collection and shows the error state
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.articles.clear();
        self.visible.clear();
        self.status = ArticlesStatus::Failed(message.into());
    }

    /// Restricts the visible list to articles matching a lowercased needle
    ///
    /// Always filters the full collection, never the previous view.
    pub fn apply_filter(&mut self, needle: &str) {
        self.visible = filter::matching_ids(&self.articles, needle);
    }

    /// Titles the panel for a newly requested article
    pub fn begin_recommendations(&mut self, title: impl Into<String>) {
        self.recommendations.title = Some(title.into());
    }

    pub fn show_recommendations(&mut self, items: Vec<RecommendationItem>) {
        self.recommendations.items = Some(items);
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Removes and returns the notices not yet shown
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
