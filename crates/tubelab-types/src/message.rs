use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Statistics snapshot carried inside an assistant reply
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
}

/// Machine-readable portion of an assistant reply — ids, counts, thumbnail.
/// All fields are optional; which ones are present depends on the question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyData {
    #[serde(rename = "videoId", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(rename = "channelId", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<StatsSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A single turn in a conversation transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    /// Present only on assistant turns that carry a structured payload
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<ReplyData>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            data: None,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            data: None,
        }
    }

    pub fn assistant_with_data(text: impl Into<String>, data: ReplyData) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            data: Some(data),
        }
    }
}
