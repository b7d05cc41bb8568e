//! Application constants and environment-driven configuration.

pub const APP_NAME: &str = "Visapath";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Low temperature keeps the review structure stable across repeated
/// calls on similar input.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Address the API server binds to.
pub fn bind_addr() -> String {
    std::env::var("VISAPATH_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Completion-service configuration, read from the environment at startup
/// and passed into the client explicitly — no process-wide singleton.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl CompletionConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("VISAPATH_OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            model: std::env::var("VISAPATH_OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: 60,
        }
    }
}
