use serde::{Deserialize, Serialize};

/// Durations are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NegotiatorConfig {
    pub retry_interval: u64,
    pub resolve_timeout: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}
