// ListingExtractor orchestrator - picks the backend for the configured mode
//
// Auto mode prefers the Python module and falls back to the binary only when
// the module is not installed. A failed extraction is never re-run on the
// other backend.

use async_trait::async_trait;

use super::cli::CliListingExtractor;
use super::python::PythonListingExtractor;
use super::traits::{ExtractorConfig, ExtractorMode, ListingExtractor};
use crate::lister::errors::ListError;
use crate::lister::models::{ListingRequest, RawListing};

/// Orchestrator that manages Python and CLI extractors
pub struct ExtractorOrchestrator {
    mode: ExtractorMode,
    python: Box<dyn ListingExtractor>,
    cli: Box<dyn ListingExtractor>,
}

impl ExtractorOrchestrator {
    pub fn new(config: ExtractorConfig) -> Self {
        let mode = config.mode;
        Self::with_backends(
            mode,
            Box::new(PythonListingExtractor::new(config.clone())),
            Box::new(CliListingExtractor::new(config)),
        )
    }

    pub fn with_backends(
        mode: ExtractorMode,
        python: Box<dyn ListingExtractor>,
        cli: Box<dyn ListingExtractor>,
    ) -> Self {
        Self { mode, python, cli }
    }

    /// Resolve the backend for the configured mode
    fn select(&self) -> Result<&dyn ListingExtractor, ListError> {
        match self.mode {
            ExtractorMode::Python => Ok(self.python.as_ref()),
            ExtractorMode::Cli => Ok(self.cli.as_ref()),
            ExtractorMode::Auto => {
                if self.python.is_available() {
                    Ok(self.python.as_ref())
                } else if self.cli.is_available() {
                    Ok(self.cli.as_ref())
                } else {
                    Err(ListError::ToolNotFound(
                        "Neither Python yt_dlp nor yt-dlp binary available. \
                         Install yt-dlp: pip3 install yt-dlp"
                            .to_string(),
                    ))
                }
            }
        }
    }
}

#[async_trait]
impl ListingExtractor for ExtractorOrchestrator {
    fn name(&self) -> &'static str {
        "orchestrator"
    }

    fn is_available(&self) -> bool {
        self.python.is_available() || self.cli.is_available()
    }

    async fn extract_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<Option<RawListing>, ListError> {
        let backend = self.select()?;
        tracing::debug!(
            mode = %self.mode,
            backend = backend.name(),
            "listing {} (first {})",
            request.source_url(),
            request.max_count()
        );

        backend.extract_listing(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubExtractor {
        name: &'static str,
        available: bool,
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl StubExtractor {
        fn boxed(
            name: &'static str,
            available: bool,
            fail: bool,
        ) -> (Box<dyn ListingExtractor>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let stub = Self {
                name,
                available,
                calls: calls.clone(),
                fail,
            };
            (Box::new(stub), calls)
        }
    }

    #[async_trait]
    impl ListingExtractor for StubExtractor {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn extract_listing(
            &self,
            _request: &ListingRequest,
        ) -> Result<Option<RawListing>, ListError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ListError::Unknown(format!("{} failed", self.name)))
            } else {
                Ok(Some(RawListing::default()))
            }
        }
    }

    fn request() -> ListingRequest {
        ListingRequest::new("https://www.youtube.com/@chan/videos", 3).unwrap()
    }

    #[tokio::test]
    async fn test_auto_prefers_python() {
        let (python, py_calls) = StubExtractor::boxed("python", true, false);
        let (cli, cli_calls) = StubExtractor::boxed("cli", true, false);
        let orch = ExtractorOrchestrator::with_backends(ExtractorMode::Auto, python, cli);

        orch.extract_listing(&request()).await.unwrap();
        assert_eq!(py_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cli_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_auto_uses_cli_when_python_missing() {
        let (python, py_calls) = StubExtractor::boxed("python", false, false);
        let (cli, cli_calls) = StubExtractor::boxed("cli", true, false);
        let orch = ExtractorOrchestrator::with_backends(ExtractorMode::Auto, python, cli);

        orch.extract_listing(&request()).await.unwrap();
        assert_eq!(py_calls.load(Ordering::SeqCst), 0);
        assert_eq!(cli_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_not_retried_on_other_backend() {
        let (python, py_calls) = StubExtractor::boxed("python", true, true);
        let (cli, cli_calls) = StubExtractor::boxed("cli", true, false);
        let orch = ExtractorOrchestrator::with_backends(ExtractorMode::Auto, python, cli);

        let err = orch.extract_listing(&request()).await.unwrap_err();
        assert_eq!(err, ListError::Unknown("python failed".to_string()));
        assert_eq!(py_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cli_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_auto_without_any_backend() {
        let (python, _) = StubExtractor::boxed("python", false, false);
        let (cli, _) = StubExtractor::boxed("cli", false, false);
        let orch = ExtractorOrchestrator::with_backends(ExtractorMode::Auto, python, cli);

        assert!(!orch.is_available());
        let err = orch.extract_listing(&request()).await.unwrap_err();
        assert!(matches!(err, ListError::ToolNotFound(_)));
    }

    #[tokio::test]
    async fn test_explicit_mode_skips_availability_probe() {
        let (python, py_calls) = StubExtractor::boxed("python", false, false);
        let (cli, _) = StubExtractor::boxed("cli", true, false);
        let orch = ExtractorOrchestrator::with_backends(ExtractorMode::Python, python, cli);

        orch.extract_listing(&request()).await.unwrap();
        assert_eq!(py_calls.load(Ordering::SeqCst), 1);
    }
}
