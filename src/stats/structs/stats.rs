use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub datagrams_received: i64,
    pub malformed_dropped: i64,
    pub unsolicited_dropped: i64,
    pub late_responses_dropped: i64,
    pub announces_sent: i64,
    pub pulses_sent: i64,
    pub pulse_failures: i64,
    pub pushes_sent: i64,
    pub pushes_resolved: i64,
    pub pushes_abandoned: i64,
    pub incoming_notices: i64,
    pub protocol_errors: i64,
}
