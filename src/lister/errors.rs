// Error types for listing extractors

use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListError {
    /// Network timeout while talking to the video host; extractor stderr when it reported one
    #[error("Network timeout: the video host is not responding")]
    NetworkTimeout(Option<String>),

    /// The host refused the request (429, bot check); carries the extractor stderr
    #[error("The video host refused the request")]
    Blocked(String),

    /// yt-dlp or python not found in system
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// URL the extractor could not handle
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse yt-dlp JSON output
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Command execution failed
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// Unknown error with details
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ListError {
    /// Text to diagnose: the extractor's own output when the error carries it
    pub fn diagnostic_text(&self) -> Cow<'_, str> {
        match self {
            Self::NetworkTimeout(Some(raw))
            | Self::Blocked(raw)
            | Self::InvalidUrl(raw)
            | Self::Unknown(raw) => Cow::Borrowed(raw.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }
}

// Classify raw extractor stderr. Every variant built here keeps the text.
impl From<String> for ListError {
    fn from(s: String) -> Self {
        let lower = s.to_lowercase();

        if lower.contains("timeout") || lower.contains("timed out") {
            return Self::NetworkTimeout(Some(s));
        }

        if lower.contains("http error 429")
            || lower.contains("too many requests")
            || lower.contains("not a bot")
            || lower.contains("confirm you")
        {
            return Self::Blocked(s);
        }

        if lower.contains("unsupported url") || lower.contains("is not a valid url") {
            return Self::InvalidUrl(s);
        }

        if lower.contains("no such file") || lower.contains("command not found") {
            return Self::ToolNotFound(s);
        }

        if lower.contains("json") {
            return Self::ParseError(s);
        }

        if s.trim().is_empty() {
            return Self::Unknown("extractor exited without output".to_string());
        }

        Self::Unknown(s)
    }
}
