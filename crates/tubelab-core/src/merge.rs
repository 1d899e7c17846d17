//! Correlation of search stubs with their separately fetched statistics.
//!
//! The statistics endpoint does not promise to return entries in request
//! order, and a partially successful batch may omit ids entirely — so the
//! join is keyed by id, never by position.

use std::collections::HashMap;

use tubelab_types::{
    ClientError, Result,
    video::{VideoRecord, VideoStats, VideoStub},
};

/// Merge an ordered list of search stubs with an id-keyed statistics map.
///
/// Output preserves stub order exactly and always has one record per stub.
/// A stub whose id is missing from `stats` gets zeroed counts rather than
/// being dropped or aborting the batch.
pub fn merge_statistics(
    stubs: Vec<VideoStub>,
    stats: &HashMap<String, VideoStats>,
) -> Result<Vec<VideoRecord>> {
    stubs
        .into_iter()
        .map(|stub| {
            if stub.id.is_empty() {
                return Err(ClientError::Validation(
                    "search result is missing a video id".to_string(),
                ));
            }
            let entry = stats.get(&stub.id).copied().unwrap_or_default();
            Ok(VideoRecord::from_parts(stub, entry))
        })
        .collect()
}
