/// Client-level errors
///
/// Every failure a user action can hit ends up here: transport errors from
/// reqwest, unsuccessful statuses, bodies that do not match the expected shape,
/// and references to articles that are not in the loaded collection.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl AppError {
    /// True for failures that never reached the server
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::HttpClient(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}

pub type AppResult<T> = Result<T, AppError>;
