// ListingExtractor trait and extractor configuration

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::lister::errors::ListError;
use crate::lister::models::{ListingRequest, RawListing};

/// Extraction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractorMode {
    /// Python module yt_dlp
    Python,
    /// CLI binary yt-dlp
    Cli,
    /// Whichever is installed, Python first
    #[default]
    Auto,
}

impl fmt::Display for ExtractorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Cli => write!(f, "cli"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for ExtractorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "cli" => Ok(Self::Cli),
            "auto" => Ok(Self::Auto),
            other => Err(format!("unknown extractor mode '{}'", other)),
        }
    }
}

/// Configuration for listing extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub mode: ExtractorMode,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
    /// Path to cookies.txt file
    pub cookies_path: Option<String>,
    /// Browser to read cookies from (chrome, firefox, ...)
    pub cookies_from_browser: Option<String>,
    /// Wall-clock limit for the whole extraction, in seconds
    pub timeout_seconds: u32,
    /// Explicit yt-dlp binary
    pub ytdlp_path: Option<String>,
    /// Explicit Python interpreter
    pub python_path: Option<String>,
}

pub const DEFAULT_TIMEOUT_SECONDS: u32 = 120;
const MAX_SOCKET_TIMEOUT_SECONDS: u32 = 30;

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ExtractorMode::Auto,
            proxy: None,
            cookies_path: None,
            cookies_from_browser: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            ytdlp_path: None,
            python_path: None,
        }
    }
}

impl ExtractorConfig {
    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_cookies_path(mut self, path: Option<String>) -> Self {
        self.cookies_path = path;
        self
    }

    pub fn with_cookies_from_browser(mut self, browser: Option<String>) -> Self {
        self.cookies_from_browser = browser;
        self
    }

    pub fn with_mode(mut self, mode: ExtractorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.timeout_seconds = seconds.max(1);
        self
    }

    /// Per-socket timeout handed to yt-dlp; never longer than the overall limit.
    pub fn socket_timeout_seconds(&self) -> u32 {
        self.timeout_seconds.clamp(1, MAX_SOCKET_TIMEOUT_SECONDS)
    }
}

/// A collaborator that turns a channel/playlist URL into a flat listing.
///
/// `Ok(None)` means the extractor produced no listing at all; callers treat
/// it the same as a listing without entries.
#[async_trait]
pub trait ListingExtractor: Send + Sync {
    /// Name of the extractor (for logging)
    fn name(&self) -> &'static str;

    /// Check if this extractor is available
    fn is_available(&self) -> bool;

    async fn extract_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<Option<RawListing>, ListError>;
}
