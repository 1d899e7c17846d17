use serde::{Deserialize, Serialize};

const DEFAULT_PROVIDER_BASE: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_ASSISTANT_BASE: &str = "http://localhost:8000";

/// Conversation modes offered by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatMode {
    General,
    YouTube,
}

impl ChatMode {
    /// Route on the assistant backend serving this mode
    pub fn route(&self) -> &'static str {
        match self {
            ChatMode::General => "/api/chat",
            ChatMode::YouTube => "/api/youtube",
        }
    }
}

/// Assistant backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub base_url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ASSISTANT_BASE.to_string(),
        }
    }
}

/// Video provider configuration. The key is injected at adapter
/// construction, never read from a module-wide constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_base: Option<String>,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: None,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_PROVIDER_BASE)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: None,
        }
    }
}

/// Top-level client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    pub assistant: AssistantConfig,
    pub provider: ProviderConfig,
}
