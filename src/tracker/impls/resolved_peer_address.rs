use std::fmt;
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;

impl ResolvedPeerAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResolvedPeerAddress {
    fn from(value: &str) -> Self {
        ResolvedPeerAddress(value.to_string())
    }
}

impl fmt::Display for ResolvedPeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
