// Runtime configuration from environment variables

use std::path::PathBuf;

use crate::lister::extractors::{ExtractorConfig, ExtractorMode, DEFAULT_TIMEOUT_SECONDS};

pub const ENV_MODE: &str = "YTTOP_MODE";
pub const ENV_PROXY: &str = "YTTOP_PROXY";
pub const ENV_COOKIES: &str = "YTTOP_COOKIES";
pub const ENV_COOKIES_FROM_BROWSER: &str = "YTTOP_COOKIES_FROM_BROWSER";
pub const ENV_TIMEOUT: &str = "YTTOP_TIMEOUT";
pub const ENV_OUTPUT_DIR: &str = "YTTOP_OUTPUT_DIR";
pub const ENV_YTDLP: &str = "YTTOP_YTDLP";
pub const ENV_PYTHON: &str = "YTDLP_PYTHON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub extractor: ExtractorConfig,
    /// Where the snapshot file is written; `None` means the working directory
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset; malformed
    /// values are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mode = match get(ENV_MODE) {
            Some(raw) => raw.parse::<ExtractorMode>().unwrap_or_else(|e| {
                tracing::warn!(var = ENV_MODE, "{}; using auto", e);
                ExtractorMode::Auto
            }),
            None => ExtractorMode::Auto,
        };

        let timeout = match get(ENV_TIMEOUT) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(
                        var = ENV_TIMEOUT,
                        value = %raw,
                        "expected a positive number of seconds; using {}",
                        DEFAULT_TIMEOUT_SECONDS
                    );
                    DEFAULT_TIMEOUT_SECONDS
                }
            },
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        let mut extractor = ExtractorConfig::default()
            .with_mode(mode)
            .with_timeout(timeout)
            .with_proxy(get(ENV_PROXY))
            .with_cookies_path(get(ENV_COOKIES))
            .with_cookies_from_browser(get(ENV_COOKIES_FROM_BROWSER));
        extractor.ytdlp_path = get(ENV_YTDLP);
        extractor.python_path = get(ENV_PYTHON);

        Self {
            extractor,
            output_dir: get(ENV_OUTPUT_DIR).map(PathBuf::from),
        }
    }

    /// Output directory, defaulting to the current working directory
    pub fn resolve_output_dir(&self) -> std::io::Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.extractor, ExtractorConfig::default());
        assert_eq!(cfg.output_dir, None);
    }

    #[test]
    fn test_all_values() {
        let cfg = config(&[
            (ENV_MODE, "cli"),
            (ENV_PROXY, "socks5://127.0.0.1:1080"),
            (ENV_COOKIES, "/tmp/cookies.txt"),
            (ENV_COOKIES_FROM_BROWSER, "firefox"),
            (ENV_TIMEOUT, "45"),
            (ENV_OUTPUT_DIR, "/tmp/out"),
            (ENV_YTDLP, "/opt/yt-dlp"),
            (ENV_PYTHON, "/venv/bin/python"),
        ]);

        assert_eq!(cfg.extractor.mode, ExtractorMode::Cli);
        assert_eq!(cfg.extractor.proxy.as_deref(), Some("socks5://127.0.0.1:1080"));
        assert_eq!(cfg.extractor.cookies_path.as_deref(), Some("/tmp/cookies.txt"));
        assert_eq!(cfg.extractor.cookies_from_browser.as_deref(), Some("firefox"));
        assert_eq!(cfg.extractor.timeout_seconds, 45);
        assert_eq!(cfg.extractor.ytdlp_path.as_deref(), Some("/opt/yt-dlp"));
        assert_eq!(cfg.extractor.python_path.as_deref(), Some("/venv/bin/python"));
        assert_eq!(cfg.resolve_output_dir().unwrap(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = config(&[(ENV_MODE, "turbo"), (ENV_TIMEOUT, "soon"), (ENV_PROXY, "  ")]);
        assert_eq!(cfg.extractor.mode, ExtractorMode::Auto);
        assert_eq!(cfg.extractor.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(cfg.extractor.proxy, None);

        let cfg = config(&[(ENV_TIMEOUT, "0")]);
        assert_eq!(cfg.extractor.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }
}
