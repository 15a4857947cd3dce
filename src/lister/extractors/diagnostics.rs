// Failure diagnostics - explains why a listing could not be extracted
//
// Analyzes extractor error text to determine:
// - What went wrong (missing channel, private playlist, throttling, ...)
// - What the user can try next

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HTTP_STATUS_RE: Regex = Regex::new(r"HTTP Error (\d{3})").unwrap();
    static ref ERROR_LINE_RE: Regex =
        Regex::new(r"(?m)^\s*ERROR:\s*(?:\[[^\]]+\]\s*)?(?:[@\w.-]+:\s*)?(.+?)\s*$").unwrap();
}

/// Reasons a channel or playlist listing can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingReason {
    /// Channel handle or id does not resolve (HTTP 404)
    ChannelNotFound,

    /// Playlist deleted or never existed
    PlaylistUnavailable,

    /// Private playlist or channel tab
    Private,

    /// Geographic restriction
    GeoBlocked,

    /// Rate limiting (429 or similar)
    RateLimited,

    /// Bot detection triggered
    BotDetection,

    /// HTTP 403 Forbidden
    Http403Forbidden,

    /// Network timeout (soft IP block or dead connection)
    NetworkTimeout,

    /// yt-dlp has no extractor for this URL
    UnsupportedUrl,

    Unknown,
}

impl BlockingReason {
    /// Check if cookies might help
    pub fn cookies_might_help(&self) -> bool {
        matches!(
            self,
            Self::Private | Self::BotDetection | Self::Http403Forbidden
        )
    }

    /// Check if proxy might help
    pub fn proxy_might_help(&self) -> bool {
        matches!(
            self,
            Self::GeoBlocked
                | Self::RateLimited
                | Self::BotDetection
                | Self::Http403Forbidden
                | Self::NetworkTimeout
        )
    }

    /// Nothing the user can change on their side will fix it
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::ChannelNotFound | Self::PlaylistUnavailable | Self::UnsupportedUrl
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ChannelNotFound => "Channel not found",
            Self::PlaylistUnavailable => "Playlist unavailable",
            Self::Private => "Private channel or playlist",
            Self::GeoBlocked => "Geographic restriction",
            Self::RateLimited => "Rate limited by the video host",
            Self::BotDetection => "Bot detection triggered",
            Self::Http403Forbidden => "Access denied (HTTP 403)",
            Self::NetworkTimeout => "Network timeout",
            Self::UnsupportedUrl => "Unsupported URL",
            Self::Unknown => "Unknown failure",
        }
    }

    /// What the user can try next
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::ChannelNotFound => {
                "Check the channel URL. Handles look like https://www.youtube.com/@name/videos"
            }
            Self::PlaylistUnavailable => {
                "The playlist may have been deleted. Check the list= parameter of the URL."
            }
            Self::Private => {
                "Listing a private playlist needs an authorized account.\n\
                 Set YTTOP_COOKIES to a cookies.txt file or\n\
                 YTTOP_COOKIES_FROM_BROWSER to a logged-in browser."
            }
            Self::GeoBlocked => "Route the request through another region with YTTOP_PROXY.",
            Self::RateLimited => {
                "Wait 10-15 minutes before trying again, or use a different IP via YTTOP_PROXY."
            }
            Self::BotDetection => {
                "Use cookies from a logged-in browser (YTTOP_COOKIES_FROM_BROWSER=chrome)\n\
                 or a fresh proxy (YTTOP_PROXY)."
            }
            Self::Http403Forbidden => {
                "Update yt-dlp, refresh your cookies, or try again through a proxy."
            }
            Self::NetworkTimeout => {
                "Check your internet connection or raise YTTOP_TIMEOUT (seconds)."
            }
            Self::UnsupportedUrl => "Pass a channel, channel tab, or playlist URL.",
            Self::Unknown => "Check the URL and try again; RUST_LOG=yttop=debug shows the extractor output.",
        }
    }
}

/// Detailed diagnostics information
#[derive(Debug, Clone)]
pub struct Diagnostics {
    pub reason: BlockingReason,

    /// First `ERROR:` message from the extractor, if any
    pub context: Option<String>,

    /// HTTP status reported by the extractor
    pub http_status: Option<u16>,

    pub recommend_cookies: bool,

    pub recommend_proxy: bool,
}

impl Diagnostics {
    pub fn new(reason: BlockingReason, context: Option<String>, http_status: Option<u16>) -> Self {
        Self {
            reason,
            context,
            http_status,
            recommend_cookies: reason.cookies_might_help(),
            recommend_proxy: reason.proxy_might_help(),
        }
    }

    /// Multi-line report for the error stream
    pub fn report(&self) -> String {
        let mut out = format!("Reason: {}", self.reason.description());
        if let Some(status) = self.http_status {
            out.push_str(&format!(" (HTTP {})", status));
        }
        if let Some(context) = &self.context {
            out.push_str(&format!("\nDetails: {}", context));
        }
        out.push_str("\n\n");
        out.push_str(self.reason.suggestion());
        out
    }
}

fn http_status(error: &str) -> Option<u16> {
    HTTP_STATUS_RE
        .captures(error)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn first_error_line(error: &str) -> Option<String> {
    ERROR_LINE_RE
        .captures(error)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Analyze error message and return the most specific reason
pub fn diagnose_error(error: &str) -> Option<BlockingReason> {
    if error.trim().is_empty() {
        return None;
    }

    let lower = error.to_lowercase();

    match http_status(error) {
        Some(404) => return Some(BlockingReason::ChannelNotFound),
        Some(429) => return Some(BlockingReason::RateLimited),
        Some(403) => return Some(BlockingReason::Http403Forbidden),
        _ => {}
    }

    if lower.contains("unsupported url") {
        return Some(BlockingReason::UnsupportedUrl);
    }

    if lower.contains("this channel does not exist")
        || lower.contains("channel does not exist")
        || lower.contains("unable to recognize tab page")
    {
        return Some(BlockingReason::ChannelNotFound);
    }

    if lower.contains("playlist does not exist")
        || lower.contains("the playlist does not exist")
        || lower.contains("unable to recognize playlist")
    {
        return Some(BlockingReason::PlaylistUnavailable);
    }

    if lower.contains("private") || lower.contains("sign in if you've been granted access") {
        return Some(BlockingReason::Private);
    }

    if lower.contains("not available in your country") || lower.contains("geo restrict") {
        return Some(BlockingReason::GeoBlocked);
    }

    if lower.contains("rate limit")
        || lower.contains("too many requests")
        || lower.contains("throttling")
    {
        return Some(BlockingReason::RateLimited);
    }

    if lower.contains("confirm you're not a bot")
        || lower.contains("captcha")
        || lower.contains("unusual traffic")
    {
        return Some(BlockingReason::BotDetection);
    }

    if lower.contains("forbidden") {
        return Some(BlockingReason::Http403Forbidden);
    }

    if lower.contains("timeout")
        || lower.contains("timed out")
        || lower.contains("connection refused")
        || lower.contains("network unreachable")
        || lower.contains("name or service not known")
    {
        return Some(BlockingReason::NetworkTimeout);
    }

    Some(BlockingReason::Unknown)
}

/// Full diagnostic analysis of an error
pub fn analyze_error(error: &str) -> Diagnostics {
    let reason = diagnose_error(error).unwrap_or(BlockingReason::Unknown);
    Diagnostics::new(reason, first_error_line(error), http_status(error))
}
