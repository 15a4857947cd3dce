// Listing extractors - drive yt-dlp in flat-listing mode
//
// Two backends:
// - Python mode: `python3 -m yt_dlp`
// - CLI mode: native `yt-dlp` binary
//
// The orchestrator picks one per configured mode.

mod cli;
mod diagnostics;
mod orchestrator;
mod python;
mod traits;

pub use cli::CliListingExtractor;
pub use diagnostics::{analyze_error, diagnose_error, BlockingReason, Diagnostics};
pub use orchestrator::ExtractorOrchestrator;
pub use python::PythonListingExtractor;
pub use traits::{ExtractorConfig, ExtractorMode, ListingExtractor, DEFAULT_TIMEOUT_SECONDS};
