//! Assistant backend adapter — one instance per conversation mode.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use tubelab_core::ports::{AssistantPort, AssistantReply};
use tubelab_types::{
    ClientError, Result,
    config::{AssistantConfig, ChatMode},
    message::ReplyData,
};

pub struct AssistantHttp {
    client: Client,
    config: AssistantConfig,
    mode: ChatMode,
}

impl AssistantHttp {
    pub fn new(config: AssistantConfig, mode: ChatMode) -> Self {
        Self {
            client: Client::new(),
            config,
            mode,
        }
    }
}

#[async_trait]
impl AssistantPort for AssistantHttp {
    async fn ask(&self, question: &str) -> Result<AssistantReply> {
        if question.trim().is_empty() {
            return Err(ClientError::Validation("question is empty".to_string()));
        }

        let url = format!("{}{}", self.config.base_url, self.mode.route());
        let response = self
            .client
            .post(&url)
            .json(&json!({ "question": question }))
            .send()
            .await
            .map_err(|e| ClientError::Remote(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Remote(format!(
                "HTTP {} from {}",
                response.status(),
                self.mode.route()
            )));
        }

        let data: AskResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Remote(e.to_string()))?;

        Ok(AssistantReply {
            text: data.response,
            data: data.data,
        })
    }
}

/// Wire shape of both assistant routes; `data` is present only on the
/// YouTube-research route, and only when the reply has structured content.
#[derive(Deserialize)]
pub(crate) struct AskResponse {
    #[serde(default)]
    pub(crate) response: String,
    #[serde(default)]
    pub(crate) data: Option<ReplyData>,
}
