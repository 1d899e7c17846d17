//! Port traits — the boundary between the orchestration core and HTTP
//! transport.
//!
//! These traits are defined here in `tubelab-core` (pure Rust).
//! Implementations live in `tubelab-platform` (reqwest adapters).
//! The core never imports transport code; it only depends on these traits.

use std::collections::HashMap;

use async_trait::async_trait;
use tubelab_types::{
    Result,
    message::ReplyData,
    video::{ChannelRecord, VideoRecord, VideoStats, VideoStub},
};

// ─── Assistant Port ──────────────────────────────────────────

/// Reply from the assistant backend: free text plus an optional
/// structured payload
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub text: String,
    pub data: Option<ReplyData>,
}

#[async_trait]
pub trait AssistantPort {
    /// Send one question to the assistant backend and await its reply.
    ///
    /// Fails with `Validation` when `question` is empty. The session
    /// already rejects empty input before calling this.
    async fn ask(&self, question: &str) -> Result<AssistantReply>;
}

// ─── Video Provider Port ─────────────────────────────────────

/// Raw access to the video provider API. One method per provider
/// endpoint; chaining across endpoints lives in [`crate::gateway`].
#[async_trait]
pub trait VideoApiPort {
    /// Search-stage listing: partial records without statistics.
    async fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<VideoStub>>;

    /// Batched statistics lookup, one call for all ids. The provider does
    /// not guarantee that returned entries match the order of `ids`, and
    /// may omit entries.
    async fn video_statistics(&self, ids: &[String]) -> Result<HashMap<String, VideoStats>>;

    /// Trending listing: the provider returns snippet and statistics in
    /// one response, so no second call is needed.
    async fn trending_videos(&self, max_results: u32) -> Result<Vec<VideoRecord>>;

    /// Single-video lookup. An unknown id yields an empty list.
    async fn list_videos(&self, video_id: &str) -> Result<Vec<VideoRecord>>;

    /// Single-channel lookup. An unknown id yields an empty list.
    async fn list_channels(&self, channel_id: &str) -> Result<Vec<ChannelRecord>>;
}
