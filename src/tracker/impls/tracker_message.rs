use std::collections::BTreeMap;
use crate::tracker::enums::tracker_action::TrackerAction;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::tracker::structs::share_id::ShareId;
use crate::tracker::structs::tracker_message::TrackerMessage;
use crate::tracker::tracker::{
    join_host_port,
    DATA_IP,
    DATA_MULTIADDR,
    DATA_PEER_ADDR,
    DATA_PEER_SHARE_ID,
    DATA_PORT,
    DATA_SHARE_ID
};

impl TrackerMessage {
    pub fn new(action: TrackerAction) -> TrackerMessage {
        TrackerMessage {
            action,
            override_flag: None,
            share_id: None,
            data: None,
        }
    }

    pub fn announce() -> TrackerMessage {
        TrackerMessage::new(TrackerAction::Announce)
    }

    pub fn pulse(share_id: &ShareId, override_flag: bool) -> TrackerMessage {
        TrackerMessage {
            override_flag: Some(override_flag),
            share_id: Some(share_id.0.clone()),
            ..TrackerMessage::new(TrackerAction::Pulse)
        }
    }

    pub fn push(target: &ShareId) -> TrackerMessage {
        TrackerMessage {
            share_id: Some(target.0.clone()),
            ..TrackerMessage::new(TrackerAction::Push)
        }
    }

    pub fn announce_received(share_id: &str) -> TrackerMessage {
        TrackerMessage::new(TrackerAction::AnnounceReceived).with_data(DATA_SHARE_ID, share_id)
    }

    pub fn push_received(ip: &str, port: &str, multiaddr: &str) -> TrackerMessage {
        TrackerMessage::new(TrackerAction::PushReceived)
            .with_data(DATA_IP, ip)
            .with_data(DATA_PORT, port)
            .with_data(DATA_MULTIADDR, multiaddr)
    }

    pub fn with_data(mut self, key: &str, value: &str) -> TrackerMessage {
        self.data
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    #[tracing::instrument(level = "debug")]
    pub fn encode(&self) -> Result<Vec<u8>, TrackerError> {
        Ok(serde_json::to_vec(self)?)
    }

    #[tracing::instrument(skip(payload), level = "debug")]
    pub fn decode(payload: &[u8]) -> Result<TrackerMessage, TrackerError> {
        serde_json::from_slice(payload).map_err(|e| TrackerError::Protocol(format!("undecodable datagram: {e}")))
    }

    /// Non-blank value of a `data` field.
    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.get(key))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// ShareID assigned by an `announceReceived` message.
    pub fn announced_share_id(&self) -> Result<ShareId, TrackerError> {
        match self.data_value(DATA_SHARE_ID) {
            Some(share_id) => ShareId::parse(share_id),
            None => Err(TrackerError::Protocol(String::from("announceReceived carries no data.shareId"))),
        }
    }

    /// ShareID of the peer a `pushReceived` or `income` message talks about, if the tracker names it.
    pub fn peer_share_id(&self) -> Option<ShareId> {
        self.data_value(DATA_SHARE_ID)
            .or_else(|| self.data_value(DATA_PEER_SHARE_ID))
            .map(ShareId::from)
    }

    /// Endpoint carried by a `pushReceived` or `income` message.
    ///
    /// `ip` and `port` win when both are present, then `multiaddr`, then the legacy
    /// `peeraddr` field.
    pub fn resolved_address(&self) -> Result<ResolvedPeerAddress, TrackerError> {
        if let (Some(ip), Some(port)) = (self.data_value(DATA_IP), self.data_value(DATA_PORT)) {
            return Ok(ResolvedPeerAddress(join_host_port(ip, port)));
        }
        if let Some(multiaddr) = self.data_value(DATA_MULTIADDR) {
            return Ok(ResolvedPeerAddress::from(multiaddr));
        }
        if let Some(peer_addr) = self.data_value(DATA_PEER_ADDR) {
            return Ok(ResolvedPeerAddress::from(peer_addr));
        }
        Err(TrackerError::Protocol(format!("{:?} carries no usable address", self.action)))
    }
}
