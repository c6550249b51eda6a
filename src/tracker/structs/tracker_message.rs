use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::tracker::enums::tracker_action::TrackerAction;
use crate::tracker::tracker::deserialize_string_map;

/// One tracker message, exactly one per datagram.
///
/// Requests carry their payload in `override`/`shareId`, responses in `data`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerMessage {
    pub action: TrackerAction,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub override_flag: Option<bool>,
    #[serde(rename = "shareId", default, skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_map", skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
}
