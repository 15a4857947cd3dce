// Process-level errors; every variant ends the run with exit status 1

use thiserror::Error;

use crate::lister::ListError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong number of arguments
    #[error("Usage: {program} <channel/playlist URL> <number of videos>")]
    Usage { program: String },

    /// `<count>` is not a positive base-10 integer
    #[error("Error: <number of videos> must be a positive integer, got '{0}'")]
    InvalidCount(String),

    #[error(transparent)]
    Extraction(#[from] ListError),

    /// The listing produced no usable videos
    #[error("Warning: no videos found. Check that the URL is correct and that yt-dlp can handle it.")]
    NoVideos,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not format output filename: {0}")]
    Timestamp(#[from] time::error::Format),
}
