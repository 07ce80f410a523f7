//! Article browser session
//!
//! `App` owns the state and is driven from a single task. Commands go
//! through the dispatch table; network calls run on spawned tasks and come
//! back as `Event`s that the owner applies one at a time.

pub mod handlers;
pub mod inflight;
pub mod routes;
pub mod state;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        ArticleId, FeedbackAction, FeedbackOutcome, FeedbackTarget, RecommendationItem,
    },
    services::{feedback, loader, recommendations, ArticleBackend, LoadedCollection},
};

pub use inflight::{InFlight, KeyedGuard};
pub use routes::{Action, Command, DispatchTable, Handler, Panel, Route};
pub use state::{AppState, ArticlesStatus, Notice, NoticeKind, RecommendationPanel};

pub const FEEDBACK_SAVED: &str = "Thanks, feedback saved!";
pub const FEEDBACK_REJECTED: &str = "Feedback not saved (server error).";
pub const FEEDBACK_FAILED: &str = "Failed to send feedback (see log).";

/// Completion of a background request
#[derive(Debug)]
pub enum Event {
    ArticlesLoaded {
        generation: u64,
        result: AppResult<LoadedCollection>,
    },
    RecommendationsReady {
        generation: u64,
        article: ArticleId,
        result: AppResult<Vec<RecommendationItem>>,
    },
    FeedbackSettled {
        target: FeedbackTarget,
        outcome: FeedbackOutcome,
    },
}

/// Per-session settings taken from the configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub user: String,
    pub top_k: usize,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            user: config.demo_user.clone(),
            top_k: config.top_k,
        }
    }
}

pub struct App<B> {
    backend: Arc<B>,
    settings: Settings,
    pub(crate) state: AppState,
    routes: DispatchTable<B>,
    loads: InFlight,
    recommendation_requests: InFlight,
    feedback_requests: KeyedGuard<FeedbackTarget>,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
}

impl<B: ArticleBackend + 'static> App<B> {
    /// Creates a session with the standard dispatch table
    pub fn new(backend: B, settings: Settings) -> Self {
        Self::with_routes(backend, settings, DispatchTable::standard())
    }

    pub fn with_routes(backend: B, settings: Settings, routes: DispatchTable<B>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            backend: Arc::new(backend),
            settings,
            state: AppState::new(),
            routes,
            loads: InFlight::default(),
            recommendation_requests: InFlight::default(),
            feedback_requests: KeyedGuard::default(),
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Removes and returns the notices not yet shown
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.state.take_notices()
    }

    /// Runs the handler registered for the command's route
    ///
    /// Failures are logged and turned into a notice before being returned.
    pub fn dispatch(&mut self, command: Command) -> AppResult<()> {
        let route = command.route();
        let result = match self.routes.get(route) {
            Some(handler) => handler(self, command),
            None => Err(AppError::InvalidInput(format!(
                "No handler registered for {:?}",
                route
            ))),
        };

        if let Err(e) = &result {
            tracing::warn!(error = %e, ?route, "Command failed");
            self.state.push_notice(Notice::failure(e.to_string()));
        }
        result
    }

    /// True while any request is outstanding
    pub fn has_pending(&self) -> bool {
        self.loads.is_pending()
            || self.recommendation_requests.is_pending()
            || !self.feedback_requests.is_empty()
    }

    /// Waits for the next completion
    pub async fn next_event(&mut self) -> Option<Event> {
        self.events_rx.recv().await
    }

    /// Applies completions until nothing is outstanding
    pub async fn settle(&mut self) {
        while self.has_pending() {
            match self.next_event().await {
                Some(event) => {
                    self.apply(event);
                }
                None => break,
            }
        }
    }

    /// Applies a completion to the state
    ///
    /// Returns the panel that changed, if any. Superseded completions are
    /// dropped.
    pub fn apply(&mut self, event: Event) -> Option<Panel> {
        match event {
            Event::ArticlesLoaded { generation, result } => {
                if !self.loads.complete(generation) {
                    tracing::debug!(generation, "Dropping superseded article load");
                    return None;
                }
                match result {
                    Ok(collection) => self.state.replace_collection(collection),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load articles");
                        self.state.fail_load(e.to_string());
                    }
                }
                Some(Panel::Articles)
            }
            Event::RecommendationsReady {
                generation,
                article,
                result,
            } => {
                if !self.recommendation_requests.complete(generation) {
                    tracing::debug!(generation, %article, "Dropping superseded recommendations");
                    return None;
                }
                match result {
                    Ok(items) => {
                        self.state.show_recommendations(items);
                        Some(Panel::Recommendations)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, %article, "Recommendation request failed");
                        None
                    }
                }
            }
            Event::FeedbackSettled { target, outcome } => {
                self.feedback_requests.finish(&target);
                let notice = match outcome {
                    FeedbackOutcome::Saved => Notice::success(FEEDBACK_SAVED),
                    FeedbackOutcome::Rejected { .. } => Notice::failure(FEEDBACK_REJECTED),
                    FeedbackOutcome::Failed(_) => Notice::failure(FEEDBACK_FAILED),
                };
                self.state.push_notice(notice);
                None
            }
        }
    }

    /// Starts a load, replacing any load in flight
    pub(crate) fn start_load(&mut self) {
        let generation = self.loads.begin();
        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();

        let handle = tokio::spawn(async move {
            let result = loader::load_articles(backend.as_ref()).await;
            let _ = events.send(Event::ArticlesLoaded { generation, result });
        });
        self.loads.track(handle);
    }

    /// Titles the panel and starts a recommendation request, replacing any in flight
    pub(crate) fn start_recommendations(&mut self, id: ArticleId) -> AppResult<()> {
        let title = self
            .state
            .article(id)
            .map(|loaded| loaded.article.title.clone().unwrap_or_else(|| "Untitled".to_string()))
            .ok_or_else(|| AppError::NotFound(format!("article {}", id)))?;
        self.state
            .begin_recommendations(format!("Recommendations for: {}", title));

        let generation = self.recommendation_requests.begin();
        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();
        let top_k = self.settings.top_k;

        let handle = tokio::spawn(async move {
            let result = recommendations::fetch_recommendations(backend.as_ref(), id, top_k).await;
            let _ = events.send(Event::RecommendationsReady {
                generation,
                article: id,
                result,
            });
        });
        self.recommendation_requests.track(handle);
        Ok(())
    }

    /// Sends a like unless one for the same target is already outstanding
    pub(crate) fn start_feedback(&mut self, target: FeedbackTarget) {
        if !self.feedback_requests.try_begin(target) {
            tracing::debug!(%target, "Feedback already in flight; ignoring");
            return;
        }

        let backend = Arc::clone(&self.backend);
        let events = self.events_tx.clone();
        let user = self.settings.user.clone();

        tokio::spawn(async move {
            let outcome =
                feedback::record_feedback(backend.as_ref(), &user, target, FeedbackAction::Like)
                    .await;
            let _ = events.send(Event::FeedbackSettled { target, outcome });
        });
    }
}
