use serde::Deserialize;
use std::time::Duration;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation server
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Path of the newline-delimited article metadata file (primary source)
    #[serde(default = "default_articles_feed_path")]
    pub articles_feed_path: String,

    /// Path of the JSON article list endpoint (fallback source)
    #[serde(default = "default_articles_api_path")]
    pub articles_api_path: String,

    #[serde(default = "default_recommend_path")]
    pub recommend_path: String,

    #[serde(default = "default_feedback_path")]
    pub feedback_path: String,

    /// User identifier attached to every feedback record
    #[serde(default = "default_demo_user")]
    pub demo_user: String,

    /// Number of similar articles requested per recommendation call
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Per-request timeout; unset means requests may wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_articles_feed_path() -> String {
    "/artifacts/articles_meta.jsonl".to_string()
}

fn default_articles_api_path() -> String {
    "/api/articles".to_string()
}

fn default_recommend_path() -> String {
    "/api/recommend".to_string()
}

fn default_feedback_path() -> String {
    "/api/feedback".to_string()
}

fn default_demo_user() -> String {
    "demo_user".to_string()
}

fn default_top_k() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            articles_feed_path: default_articles_feed_path(),
            articles_api_path: default_articles_api_path(),
            recommend_path: default_recommend_path(),
            feedback_path: default_feedback_path(),
            demo_user: default_demo_user(),
            top_k: default_top_k(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        if config.top_k == 0 {
            anyhow::bail!("Failed to load config: TOP_K must be at least 1");
        }
        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Joins a configured path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
