// Lister module - bounded channel/playlist listing on top of yt-dlp

pub mod errors;
pub mod extractors;
pub mod fetch;
pub mod models;
pub mod tools;
pub mod utils;

pub use errors::ListError;
pub use extractors::{ExtractorConfig, ExtractorMode, ExtractorOrchestrator, ListingExtractor};
pub use fetch::{fetch, normalize_entries};
pub use models::{ListingRequest, RawEntry, RawListing, VideoRecord};
