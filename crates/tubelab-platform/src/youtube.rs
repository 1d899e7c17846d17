//! YouTube Data API v3 adapter.
//!
//! One method per provider endpoint; the response shapes below mirror the
//! provider JSON and are converted into the shared record types before
//! leaving this module. Count fields arrive as decimal strings and parse
//! to 0 when missing or malformed.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use tubelab_core::ports::VideoApiPort;
use tubelab_types::{
    ClientError, Result,
    config::ProviderConfig,
    video::{ChannelRecord, VideoRecord, VideoStats, VideoStub},
};

pub struct YouTubeDataApi {
    client: Client,
    config: ProviderConfig,
}

impl YouTubeDataApi {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url(), path);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ClientError::Remote(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Remote(format!(
                "HTTP {} from {}",
                response.status(),
                path
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Remote(e.to_string()))
    }
}

#[async_trait]
impl VideoApiPort for YouTubeDataApi {
    async fn search_videos(&self, query: &str, max_results: u32) -> Result<Vec<VideoStub>> {
        let max = max_results.to_string();
        let data: SearchResponse = self
            .get_json(
                "/search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "video"),
                    ("maxResults", max.as_str()),
                ],
            )
            .await?;

        let total = data.items.len();
        let stubs: Vec<VideoStub> = data.items.into_iter().filter_map(search_item_to_stub).collect();
        if stubs.len() < total {
            log::debug!("search skipped {} non-video items", total - stubs.len());
        }
        Ok(stubs)
    }

    async fn video_statistics(&self, ids: &[String]) -> Result<HashMap<String, VideoStats>> {
        let joined = ids.join(",");
        let data: VideoListResponse = self
            .get_json("/videos", &[("part", "statistics"), ("id", joined.as_str())])
            .await?;

        Ok(data
            .items
            .into_iter()
            .map(|item| (item.id.clone(), item_stats(&item)))
            .collect())
    }

    async fn trending_videos(&self, max_results: u32) -> Result<Vec<VideoRecord>> {
        let max = max_results.to_string();
        let data: VideoListResponse = self
            .get_json(
                "/videos",
                &[
                    ("part", "snippet,statistics"),
                    ("chart", "mostPopular"),
                    ("maxResults", max.as_str()),
                ],
            )
            .await?;

        Ok(data.items.into_iter().map(video_item_to_record).collect())
    }

    async fn list_videos(&self, video_id: &str) -> Result<Vec<VideoRecord>> {
        let data: VideoListResponse = self
            .get_json(
                "/videos",
                &[("part", "snippet,statistics"), ("id", video_id)],
            )
            .await?;

        Ok(data.items.into_iter().map(video_item_to_record).collect())
    }

    async fn list_channels(&self, channel_id: &str) -> Result<Vec<ChannelRecord>> {
        let data: ChannelListResponse = self
            .get_json(
                "/channels",
                &[("part", "snippet,statistics"), ("id", channel_id)],
            )
            .await?;

        Ok(data.items.into_iter().map(channel_item_to_record).collect())
    }
}

// ─── Provider response shapes ────────────────────────────────

#[derive(Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) items: Vec<SearchItem>,
}

#[derive(Deserialize)]
pub(crate) struct SearchItem {
    pub(crate) id: SearchItemId,
    #[serde(default)]
    pub(crate) snippet: Snippet,
}

/// Search item ids are objects; only `type=video` hits carry `videoId`.
#[derive(Deserialize, Default)]
pub(crate) struct SearchItemId {
    #[serde(rename = "videoId", default)]
    pub(crate) video_id: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct Snippet {
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) thumbnails: Thumbnails,
    #[serde(rename = "channelTitle", default)]
    pub(crate) channel_title: String,
    #[serde(rename = "publishedAt", default)]
    pub(crate) published_at: String,
}

#[derive(Deserialize, Default)]
pub(crate) struct Thumbnails {
    #[serde(default)]
    pub(crate) medium: Option<Thumbnail>,
    #[serde(default)]
    pub(crate) high: Option<Thumbnail>,
    #[serde(default)]
    pub(crate) default: Option<Thumbnail>,
}

#[derive(Deserialize)]
pub(crate) struct Thumbnail {
    pub(crate) url: String,
}

impl Thumbnails {
    pub(crate) fn best_url(&self) -> String {
        self.medium
            .as_ref()
            .or(self.high.as_ref())
            .or(self.default.as_ref())
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub(crate) items: Vec<VideoItem>,
}

#[derive(Deserialize)]
pub(crate) struct VideoItem {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) snippet: Option<Snippet>,
    #[serde(default)]
    pub(crate) statistics: Option<VideoStatistics>,
}

#[derive(Deserialize, Default)]
pub(crate) struct VideoStatistics {
    #[serde(rename = "viewCount", default)]
    pub(crate) view_count: Option<String>,
    #[serde(rename = "likeCount", default)]
    pub(crate) like_count: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ChannelListResponse {
    #[serde(default)]
    pub(crate) items: Vec<ChannelItem>,
}

#[derive(Deserialize)]
pub(crate) struct ChannelItem {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) snippet: Snippet,
    #[serde(default)]
    pub(crate) statistics: ChannelStatistics,
}

#[derive(Deserialize, Default)]
pub(crate) struct ChannelStatistics {
    #[serde(rename = "subscriberCount", default)]
    pub(crate) subscriber_count: Option<String>,
    #[serde(rename = "videoCount", default)]
    pub(crate) video_count: Option<String>,
}

// ─── Conversions ─────────────────────────────────────────────

pub(crate) fn parse_count(raw: &Option<String>) -> u64 {
    raw.as_deref().and_then(|s| s.parse().ok()).unwrap_or(0)
}

pub(crate) fn search_item_to_stub(item: SearchItem) -> Option<VideoStub> {
    let id = item.id.video_id?;
    let snippet = item.snippet;
    Some(VideoStub {
        id,
        title: snippet.title,
        description: snippet.description,
        thumbnail_url: snippet.thumbnails.best_url(),
        channel_title: snippet.channel_title,
        published_at: snippet.published_at,
    })
}

pub(crate) fn item_stats(item: &VideoItem) -> VideoStats {
    let stats = item.statistics.as_ref();
    VideoStats {
        view_count: stats.map(|s| parse_count(&s.view_count)).unwrap_or(0),
        like_count: stats.map(|s| parse_count(&s.like_count)).unwrap_or(0),
    }
}

pub(crate) fn video_item_to_record(item: VideoItem) -> VideoRecord {
    let stats = item_stats(&item);
    let snippet = item.snippet.unwrap_or_default();
    VideoRecord {
        id: item.id,
        title: snippet.title,
        description: snippet.description,
        thumbnail_url: snippet.thumbnails.best_url(),
        channel_title: snippet.channel_title,
        published_at: snippet.published_at,
        view_count: stats.view_count,
        like_count: stats.like_count,
    }
}

pub(crate) fn channel_item_to_record(item: ChannelItem) -> ChannelRecord {
    ChannelRecord {
        id: item.id,
        title: item.snippet.title,
        description: item.snippet.description,
        thumbnail_url: item.snippet.thumbnails.best_url(),
        subscriber_count: parse_count(&item.statistics.subscriber_count),
        video_count: parse_count(&item.statistics.video_count),
    }
}
