// Video lister: extractor output -> normalized, count-bounded records

use super::errors::ListError;
use super::extractors::ListingExtractor;
use super::models::{ListingRequest, RawListing, VideoRecord};

/// List the first `request.max_count()` usable videos of `request.source_url()`.
///
/// The extractor's `--playlist-end` hint is advisory; the count is enforced
/// again here. Extractor failures are returned unchanged. An empty result is
/// not an error.
pub async fn fetch<E>(extractor: &E, request: &ListingRequest) -> Result<Vec<VideoRecord>, ListError>
where
    E: ListingExtractor + ?Sized,
{
    let listing = extractor.extract_listing(request).await?;
    let available = listing.as_ref().map_or(0, |l| l.entries.len());
    let records = normalize_entries(listing, request.max_count());

    tracing::debug!(
        extractor = extractor.name(),
        available,
        kept = records.len(),
        "normalized listing"
    );
    Ok(records)
}

/// Skip absent entries, drop entries without a title or identifier, keep the first `max_count`.
pub fn normalize_entries(listing: Option<RawListing>, max_count: usize) -> Vec<VideoRecord> {
    listing
        .map(|l| l.entries)
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(VideoRecord::from_entry)
        .take(max_count)
        .collect()
}
