use std::sync::atomic::AtomicI64;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub datagrams_received: AtomicI64,
    pub malformed_dropped: AtomicI64,
    pub unsolicited_dropped: AtomicI64,
    pub late_responses_dropped: AtomicI64,
    pub announces_sent: AtomicI64,
    pub pulses_sent: AtomicI64,
    pub pulse_failures: AtomicI64,
    pub pushes_sent: AtomicI64,
    pub pushes_resolved: AtomicI64,
    pub pushes_abandoned: AtomicI64,
    pub incoming_notices: AtomicI64,
    pub protocol_errors: AtomicI64,
}
