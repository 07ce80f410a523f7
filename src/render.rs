//! Plain-text rendering of the session panels

use std::fmt::{self, Display};

use crate::{
    app::{AppState, ArticlesStatus, Notice, NoticeKind, RecommendationPanel},
    models::{ArticleId, LoadedArticle, RecommendationItem},
};

pub const LOAD_FAILED: &str = "Failed to load articles.";
pub const NO_RECOMMENDATIONS: &str = "No recommendations.";

/// One entry of the article list
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    pub id: ArticleId,
    pub title: String,
    pub meta: String,
}

impl From<&LoadedArticle> for ArticleCard {
    fn from(loaded: &LoadedArticle) -> Self {
        let article = &loaded.article;
        Self {
            id: loaded.id,
            title: article.title.clone().unwrap_or_else(|| "Untitled".to_string()),
            meta: format!(
                "{} • {}",
                article.source.as_deref().unwrap_or_default(),
                article.display_link().unwrap_or_default()
            ),
        }
    }
}

impl Display for ArticleCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.id, self.title)?;
        write!(f, "      {}", self.meta)
    }
}

/// One entry of the recommendation panel, numbered by position
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    pub position: usize,
    pub title: String,
    pub meta: String,
}

impl RecommendationCard {
    fn new(position: usize, item: &RecommendationItem) -> Self {
        Self {
            position,
            title: item.title.clone().unwrap_or_else(|| "No title".to_string()),
            meta: item
                .source
                .clone()
                .or_else(|| item.url.clone())
                .unwrap_or_default(),
        }
    }
}

impl Display for RecommendationCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "({}) {}", self.position, self.title)?;
        write!(f, "      {}", self.meta)
    }
}

/// Cards for the visible articles; empty unless a collection is loaded
pub fn article_cards(state: &AppState) -> Vec<ArticleCard> {
    match state.status() {
        ArticlesStatus::Ready => state.visible_articles().map(ArticleCard::from).collect(),
        ArticlesStatus::NotLoaded | ArticlesStatus::Failed(_) => Vec::new(),
    }
}

pub fn recommendation_cards(panel: &RecommendationPanel) -> Vec<RecommendationCard> {
    panel
        .items
        .iter()
        .flatten()
        .enumerate()
        .map(|(position, item)| RecommendationCard::new(position, item))
        .collect()
}

/// The article panel: count label and cards, or the error state
pub fn render_articles(state: &AppState) -> String {
    match state.status() {
        ArticlesStatus::NotLoaded => "Loading articles...".to_string(),
        ArticlesStatus::Failed(_) => LOAD_FAILED.to_string(),
        ArticlesStatus::Ready => {
            let mut out = state.count_label();
            for card in article_cards(state) {
                out.push('\n');
                out.push_str(&card.to_string());
            }
            out
        }
    }
}

/// The recommendation panel, or `None` while it is hidden
pub fn render_recommendations(panel: &RecommendationPanel) -> Option<String> {
    if !panel.is_visible() {
        return None;
    }

    let mut out = panel.title.clone().unwrap_or_default();
    let cards = recommendation_cards(panel);
    if cards.is_empty() {
        out.push('\n');
        out.push_str(NO_RECOMMENDATIONS);
    }
    for card in cards {
        out.push('\n');
        out.push_str(&card.to_string());
    }
    Some(out)
}

pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Failure => "!!",
    };
    format!("[{}] {} {}", notice.at.format("%H:%M:%S"), marker, notice.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, ArticleSource};
    use crate::services::{loader::assign_ids, LoadedCollection};

    fn loaded_state(articles: Vec<Article>) -> AppState {
        let mut state = AppState::new();
        state.replace_collection(LoadedCollection {
            articles: assign_ids(articles),
            source: ArticleSource::Feed,
        });
        state
    }

    #[test]
    fn test_n_articles_render_n_cards_and_label() {
        let state = loaded_state(vec![Article::default(); 4]);
        assert_eq!(article_cards(&state).len(), 4);

        let text = render_articles(&state);
        assert!(text.starts_with("4 articles loaded"));
        assert_eq!(text.matches("Untitled").count(), 4);
    }

    #[test]
    fn test_article_card_fields() {
        let state = loaded_state(vec![Article {
            title: Some("Harbour reopens".to_string()),
            source: Some("Coast Times".to_string()),
            url: Some("https://ct.example/harbour".to_string()),
            ..Default::default()
        }]);
        let cards = article_cards(&state);
        assert_eq!(cards[0].title, "Harbour reopens");
        assert_eq!(cards[0].meta, "Coast Times • https://ct.example/harbour");
        assert_eq!(
            cards[0].to_string(),
            "[0] Harbour reopens\n      Coast Times • https://ct.example/harbour"
        );
    }

    #[test]
    fn test_failed_load_renders_error_and_no_cards() {
        let mut state = loaded_state(vec![Article::default()]);
        state.fail_load("connection refused");
        assert!(article_cards(&state).is_empty());
        assert_eq!(render_articles(&state), LOAD_FAILED);
    }

    #[test]
    fn test_not_loaded_has_no_cards() {
        let state = AppState::new();
        assert!(article_cards(&state).is_empty());
        assert_eq!(render_articles(&state), "Loading articles...");
    }

    #[test]
    fn test_hidden_panel_renders_nothing() {
        let panel = RecommendationPanel {
            title: Some("Recommendations for: x".to_string()),
            items: None,
        };
        assert_eq!(render_recommendations(&panel), None);
    }

    #[test]
    fn test_empty_recommendations_render_message() {
        let panel = RecommendationPanel {
            title: Some("Recommendations for: x".to_string()),
            items: Some(Vec::new()),
        };
        assert!(recommendation_cards(&panel).is_empty());
        assert_eq!(
            render_recommendations(&panel).unwrap(),
            "Recommendations for: x\nNo recommendations."
        );
    }

    #[test]
    fn test_recommendation_cards_fall_back_to_url() {
        let panel = RecommendationPanel {
            title: Some("Recommendations for: x".to_string()),
            items: Some(vec![
                RecommendationItem {
                    title: Some("With source".to_string()),
                    source: Some("Wire".to_string()),
                    url: Some("https://w.example".to_string()),
                    idx: None,
                },
                RecommendationItem {
                    url: Some("https://u.example".to_string()),
                    ..Default::default()
                },
            ]),
        };
        let cards = recommendation_cards(&panel);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].meta, "Wire");
        assert_eq!(cards[1].title, "No title");
        assert_eq!(cards[1].meta, "https://u.example");
        assert!(!render_recommendations(&panel).unwrap().contains(NO_RECOMMENDATIONS));
    }

    #[test]
    fn test_render_notice_marks_kind() {
        let text = render_notice(&Notice::failure("Feedback not saved (server error)."));
        assert!(text.ends_with("!! Feedback not saved (server error)."));
        let text = render_notice(&Notice::success("done"));
        assert!(text.ends_with("ok done"));
    }
}
