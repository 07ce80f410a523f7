use crate::{
    models::{FeedbackAction, FeedbackOutcome, FeedbackRequest, FeedbackTarget},
    services::backend::ArticleBackend,
};

/// Records `action` by `user` against `target`
///
/// Never fails: transport and parse errors are logged and reported as
/// `FeedbackOutcome::Failed`.
pub async fn record_feedback(
    backend: &dyn ArticleBackend,
    user: &str,
    target: FeedbackTarget,
    action: FeedbackAction,
) -> FeedbackOutcome {
    let request = FeedbackRequest::new(user, target, action);

    match backend.send_feedback(&request).await {
        Ok(response) if response.is_stored() => {
            tracing::info!(%target, %action, user, "Feedback stored");
            FeedbackOutcome::Saved
        }
        Ok(response) => {
            tracing::warn!(%target, %action, status = ?response.status, "Feedback not stored");
            FeedbackOutcome::Rejected {
                status: response.status,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, transport = e.is_transport(), %target, "Failed to send feedback");
            FeedbackOutcome::Failed(e.to_string())
        }
    }
}
