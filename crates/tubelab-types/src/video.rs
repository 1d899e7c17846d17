use serde::{Deserialize, Serialize};

/// A partial video returned by the search stage, before statistics
/// enrichment. `published_at` is the provider's RFC 3339 string, passed
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoStub {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: String,
}

/// Per-video counts from the statistics endpoint. `Default` is all zeros,
/// which is also what a video gets when the provider omits its entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VideoStats {
    pub view_count: u64,
    pub like_count: u64,
}

/// A fully enriched video: search snippet plus statistics.
/// Statistics fields are always present, defaulted to 0 when the provider
/// had no entry for the id — never absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: String,
    pub published_at: String,
    pub view_count: u64,
    pub like_count: u64,
}

impl VideoRecord {
    pub fn from_parts(stub: VideoStub, stats: VideoStats) -> Self {
        Self {
            id: stub.id,
            title: stub.title,
            description: stub.description,
            thumbnail_url: stub.thumbnail_url,
            channel_title: stub.channel_title,
            published_at: stub.published_at,
            view_count: stats.view_count,
            like_count: stats.like_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub subscriber_count: u64,
    pub video_count: u64,
}
