//! Video lookups orchestrated across provider endpoints.
//!
//! `search` is the two-stage pipeline: fetch stubs, then fetch and merge
//! statistics. The other operations are single calls routed through the
//! same record shapes for symmetry.

use tubelab_types::{
    ClientError, Result,
    video::{ChannelRecord, VideoRecord},
};

use crate::merge::merge_statistics;
use crate::ports::VideoApiPort;

/// Result-count cap for search and trending listings
pub const PAGE_SIZE: u32 = 10;

pub struct VideoGateway {
    api: Box<dyn VideoApiPort + Send + Sync>,
}

impl VideoGateway {
    pub fn new(api: Box<dyn VideoApiPort + Send + Sync>) -> Self {
        Self { api }
    }

    /// Search videos and enrich each hit with its statistics.
    ///
    /// Zero search hits is an empty result, not an error. A failed
    /// statistics batch fails the whole search — statistics are not
    /// optional at this level; only per-id gaps inside a successful
    /// batch are tolerated (see [`merge_statistics`]).
    pub async fn search(&self, query: &str) -> Result<Vec<VideoRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::Validation("search query is empty".to_string()));
        }

        let stubs = self.api.search_videos(query, PAGE_SIZE).await?;
        if stubs.is_empty() {
            return Ok(Vec::new());
        }

        // One batched call for all ids, issued only after the search
        // stage resolves — stage 2 consumes stage 1 output.
        let ids: Vec<String> = stubs.iter().map(|s| s.id.clone()).collect();
        let stats = self.api.video_statistics(&ids).await?;
        if stats.len() < ids.len() {
            log::debug!(
                "statistics batch returned {} of {} requested ids",
                stats.len(),
                ids.len()
            );
        }

        merge_statistics(stubs, &stats)
    }

    /// Trending videos, snippet and statistics in one provider response
    pub async fn trending(&self) -> Result<Vec<VideoRecord>> {
        self.api.trending_videos(PAGE_SIZE).await
    }

    /// Look up a single channel by id
    pub async fn channel(&self, channel_id: &str) -> Result<ChannelRecord> {
        let mut items = self.api.list_channels(channel_id).await?;
        if items.is_empty() {
            return Err(ClientError::NotFound(format!("channel {channel_id}")));
        }
        Ok(items.remove(0))
    }

    /// Look up a single video by id
    pub async fn video(&self, video_id: &str) -> Result<VideoRecord> {
        let mut items = self.api.list_videos(video_id).await?;
        if items.is_empty() {
            return Err(ClientError::NotFound(format!("video {video_id}")));
        }
        Ok(items.remove(0))
    }
}
