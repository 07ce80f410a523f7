use std::collections::HashMap;

use crate::{error::AppResult, models::ArticleId, services::ArticleBackend};

use super::{handlers, App};

/// Area of the screen a command originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Articles,
    Recommendations,
    Toolbar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Load,
    Filter,
    Similar,
    Like,
}

/// (panel, action) pair a handler is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route(pub Panel, pub Action);

/// A user action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Reload the collection from the server
    Refresh,
    /// Submit a search query; blank reloads
    Search(String),
    Similar(ArticleId),
    Like(ArticleId),
    /// Like the n-th displayed recommendation
    LikeRecommendation(usize),
    /// Recommendations for the first article
    Demo,
}

impl Command {
    pub fn route(&self) -> Route {
        match self {
            Command::Refresh => Route(Panel::Articles, Action::Load),
            Command::Search(_) => Route(Panel::Articles, Action::Filter),
            Command::Similar(_) => Route(Panel::Articles, Action::Similar),
            Command::Like(_) => Route(Panel::Articles, Action::Like),
            Command::LikeRecommendation(_) => Route(Panel::Recommendations, Action::Like),
            Command::Demo => Route(Panel::Toolbar, Action::Similar),
        }
    }
}

pub type Handler<B> = fn(&mut App<B>, Command) -> AppResult<()>;

/// Maps routes to handlers
pub struct DispatchTable<B> {
    routes: HashMap<Route, Handler<B>>,
}

impl<B> Default for DispatchTable<B> {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }
}

impl<B: ArticleBackend + 'static> DispatchTable<B> {
    /// Creates the table with every built-in command registered
    pub fn standard() -> Self {
        Self::default()
            .route(Route(Panel::Articles, Action::Load), handlers::refresh)
            .route(Route(Panel::Articles, Action::Filter), handlers::search)
            .route(Route(Panel::Articles, Action::Similar), handlers::similar)
            .route(Route(Panel::Articles, Action::Like), handlers::like)
            .route(
                Route(Panel::Recommendations, Action::Like),
                handlers::like_recommendation,
            )
            .route(Route(Panel::Toolbar, Action::Similar), handlers::demo)
    }

    /// Registers `handler` under `route`, replacing any previous one
    pub fn route(mut self, route: Route, handler: Handler<B>) -> Self {
        self.routes.insert(route, handler);
        self
    }

    pub fn get(&self, route: Route) -> Option<Handler<B>> {
        self.routes.get(&route).copied()
    }
}
