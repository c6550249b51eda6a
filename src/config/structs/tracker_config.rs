use serde::{Deserialize, Serialize};

/// Durations are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    pub address: String,
    pub announce_timeout: u64,
    pub announce_retry_interval: u64,
    pub keepalive_interval: u64,
}
