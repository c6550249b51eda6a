use serde::{Deserialize, Serialize};
use crate::config::structs::negotiator_config::NegotiatorConfig;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    pub log_console_interval: u64,
    pub tracker: TrackerConfig,
    pub negotiator: NegotiatorConfig,
    pub peer: PeerConfig,
}
