// Python ListingExtractor - uses `python3 -m yt_dlp`
//
// Works with whatever yt_dlp the interpreter has installed, which is often
// newer than the packaged binary. Override the interpreter with YTDLP_PYTHON.

use async_trait::async_trait;

use super::traits::{ExtractorConfig, ListingExtractor};
use crate::lister::errors::ListError;
use crate::lister::models::{ListingRequest, RawListing};
use crate::lister::tools::{self, ToolType};
use crate::lister::utils::{interpret_output, listing_args, run_output_with_timeout};

/// Python-based listing extractor using the yt_dlp module
pub struct PythonListingExtractor {
    python_cmd: String,
    config: ExtractorConfig,
}

impl PythonListingExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            python_cmd: tools::locate(ToolType::Python, config.python_path.as_deref()),
            config,
        }
    }

    pub fn python_cmd(&self) -> &str {
        &self.python_cmd
    }

    fn build_args(&self, request: &ListingRequest) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "yt_dlp".to_string()];
        args.extend(listing_args(request, &self.config));
        args
    }
}

#[async_trait]
impl ListingExtractor for PythonListingExtractor {
    fn name(&self) -> &'static str {
        "python-yt-dlp"
    }

    /// Check if the yt_dlp module is importable
    fn is_available(&self) -> bool {
        tools::probe(&self.python_cmd, &["-c", "import yt_dlp"])
    }

    async fn extract_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<Option<RawListing>, ListError> {
        let args = self.build_args(request);
        tracing::debug!(
            extractor = self.name(),
            "running {} {}",
            self.python_cmd,
            args.join(" ")
        );

        let output = run_output_with_timeout(
            &self.python_cmd,
            &args,
            self.config.timeout_seconds as u64,
        )
        .await?;

        // `python -m` on a missing module fails before yt-dlp ever runs
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("No module named yt_dlp") {
                return Err(ListError::ToolNotFound(
                    "Python yt_dlp module not installed".to_string(),
                ));
            }
        }

        interpret_output(self.name(), &output)
    }
}
