use serde::{Deserialize, Serialize};

/// Built-in endpoint used when no other configuration layer provides one.
///
/// This is the placeholder the site ships with before the counting service is
/// deployed; real deployments override it via `VISITOR_API_URL` or the config
/// file.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/visit";

/// Client configuration for the visitor counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Counting endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Client identifier sent as the `userAgent` field of each visit.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Paths that trigger a count. Empty counts every page.
    #[serde(default)]
    pub count_pages: Vec<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_request_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
            user_agent: default_user_agent(),
            count_pages: Vec::new(),
        }
    }
}

impl CounterConfig {
    /// Whether the gating policy counts a visit to `path`.
    pub fn counts_page(&self, path: &str) -> bool {
        self.count_pages.is_empty() || self.count_pages.iter().any(|p| p == path)
    }
}
