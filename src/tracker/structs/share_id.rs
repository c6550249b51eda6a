use serde::{Deserialize, Serialize};

/// Opaque identifier the tracker hands out for a registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ShareId(pub String);
