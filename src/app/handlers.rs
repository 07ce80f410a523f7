use crate::{
    error::{AppError, AppResult},
    models::{ArticleId, FeedbackTarget},
    services::{ArticleBackend, FilterQuery},
};

use super::{App, Command};

fn unexpected(handler: &str, command: Command) -> AppError {
    AppError::Internal(format!("{} handler received {:?}", handler, command))
}

/// Reloads the collection
pub fn refresh<B: ArticleBackend + 'static>(app: &mut App<B>, _command: Command) -> AppResult<()> {
    app.start_load();
    Ok(())
}

/// Filters the loaded collection, or reloads it for a blank query
pub fn search<B: ArticleBackend + 'static>(app: &mut App<B>, command: Command) -> AppResult<()> {
    let raw = match command {
        Command::Search(raw) => raw,
        other => return Err(unexpected("search", other)),
    };

    match FilterQuery::parse(&raw) {
        FilterQuery::Reload => app.start_load(),
        FilterQuery::Match(needle) => {
            app.state.apply_filter(&needle);
            tracing::info!(query = %needle, matches = app.state.visible_count(), "Filter applied");
        }
    }
    Ok(())
}

pub fn similar<B: ArticleBackend + 'static>(app: &mut App<B>, command: Command) -> AppResult<()> {
    let id = match command {
        Command::Similar(id) => id,
        other => return Err(unexpected("similar", other)),
    };
    app.start_recommendations(id)
}

/// Recommendations for the first article of the collection
pub fn demo<B: ArticleBackend + 'static>(app: &mut App<B>, _command: Command) -> AppResult<()> {
    app.start_recommendations(ArticleId(0))
}

pub fn like<B: ArticleBackend + 'static>(app: &mut App<B>, command: Command) -> AppResult<()> {
    let id = match command {
        Command::Like(id) => id,
        other => return Err(unexpected("like", other)),
    };
    if app.state.article(id).is_none() {
        return Err(AppError::NotFound(format!("article {}", id)));
    }
    app.start_feedback(FeedbackTarget::Article(id));
    Ok(())
}

/// Likes a displayed recommendation through its index hint
pub fn like_recommendation<B: ArticleBackend + 'static>(
    app: &mut App<B>,
    command: Command,
) -> AppResult<()> {
    let position = match command {
        Command::LikeRecommendation(position) => position,
        other => return Err(unexpected("like_recommendation", other)),
    };
    let target = app
        .state
        .recommendation(position)
        .map(|item| item.feedback_target())
        .ok_or_else(|| AppError::NotFound(format!("recommendation {}", position)))?;
    app.start_feedback(target);
    Ok(())
}
