use serde::{Deserialize, Serialize};

/// Value of the `action` field of a tracker message.
///
/// Any action this client does not know decodes as `Unknown` so the listener can log
/// and drop it instead of treating it as a decode failure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TrackerAction {
    Announce,
    Pulse,
    Push,
    AnnounceReceived,
    PushReceived,
    Income,
    #[serde(other)]
    Unknown,
}
