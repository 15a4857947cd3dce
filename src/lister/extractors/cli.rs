// CLI ListingExtractor - uses the native `yt-dlp` binary
//
// Faster start-up than Python mode and no Python dependency.

use async_trait::async_trait;

use super::traits::{ExtractorConfig, ListingExtractor};
use crate::lister::errors::ListError;
use crate::lister::models::{ListingRequest, RawListing};
use crate::lister::tools::{self, ToolType};
use crate::lister::utils::{interpret_output, listing_args, run_output_with_timeout};

/// CLI-based listing extractor using yt-dlp binary
pub struct CliListingExtractor {
    ytdlp_path: String,
    config: ExtractorConfig,
}

impl CliListingExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            ytdlp_path: tools::locate(ToolType::YtDlp, config.ytdlp_path.as_deref()),
            config,
        }
    }

    pub fn ytdlp_path(&self) -> &str {
        &self.ytdlp_path
    }

    fn build_args(&self, request: &ListingRequest) -> Vec<String> {
        listing_args(request, &self.config)
    }
}

#[async_trait]
impl ListingExtractor for CliListingExtractor {
    fn name(&self) -> &'static str {
        "cli-yt-dlp"
    }

    fn is_available(&self) -> bool {
        tools::probe(&self.ytdlp_path, &["--version"])
    }

    async fn extract_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<Option<RawListing>, ListError> {
        let args = self.build_args(request);
        tracing::debug!(
            extractor = self.name(),
            "running {} {}",
            self.ytdlp_path,
            args.join(" ")
        );

        let output = run_output_with_timeout(
            &self.ytdlp_path,
            &args,
            self.config.timeout_seconds as u64,
        )
        .await?;

        interpret_output(self.name(), &output)
    }
}
