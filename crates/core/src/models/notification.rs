use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Toast severity. The demo flows only ever emit `Info` and `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A transient UI message with a fixed lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub severity: Severity,

    /// Virtual clock time (ms) when the notification was pushed
    pub created_at_ms: u64,

    /// Virtual clock time (ms) when it is auto-dismissed
    pub expires_at_ms: u64,
}

impl Notification {
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        created_at_ms: u64,
        timeout_ms: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            severity,
            created_at_ms,
            expires_at_ms: created_at_ms.saturating_add(timeout_ms),
        }
    }
}
