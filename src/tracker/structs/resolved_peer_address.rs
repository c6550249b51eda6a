use serde::{Deserialize, Serialize};

/// Transport endpoint the tracker returned for a peer.
///
/// Never parsed here; it is handed unchanged to the stream transport.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ResolvedPeerAddress(pub String);
