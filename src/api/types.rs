use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of the counting `POST`.
///
/// Field names are part of the wire contract. The service also accepts an
/// empty body and treats it as a generic visit; this client always sends the
/// full shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    /// Page being visited.
    pub page: String,
    /// Client identifier.
    pub user_agent: String,
    /// Call-time UTC instant, ISO-8601.
    pub timestamp: String,
}

impl VisitRequest {
    /// Builds a request for `page`, stamped with the current UTC instant.
    pub fn new(page: &str, user_agent: &str) -> Self {
        Self {
            page: page.to_string(),
            user_agent: user_agent.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Body of a counting response.
///
/// `count` is required. `timestamp` and `success` are sent by some service
/// versions; `success: false` marks the service's own failure envelope, which
/// arrives with HTTP 200.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitResponse {
    pub count: u64,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

impl VisitResponse {
    /// Whether the service reported a real count.
    pub fn is_usable(&self) -> bool {
        self.success != Some(false)
    }
}
