use std::collections::BTreeMap;
use std::time::Duration;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Largest datagram the listener will read. Tracker messages are small JSON objects.
pub const MAX_PACKET_SIZE: usize = 2048;

/// Shortest period any resend or pulse timer runs with. A zero period would spin.
pub const MIN_TICK: Duration = Duration::from_millis(1);

pub const DATA_SHARE_ID: &str = "shareId";
pub const DATA_PEER_SHARE_ID: &str = "peerShareId";
pub const DATA_IP: &str = "ip";
pub const DATA_PORT: &str = "port";
pub const DATA_MULTIADDR: &str = "multiaddr";
pub const DATA_PEER_ADDR: &str = "peeraddr";

/// Reads the `data` object of a tracker message as a string map.
///
/// Trackers are not consistent about quoting numbers (`"port": 5000` vs `"port": "5000"`),
/// so scalar values are kept in their textual form. `null` entries are skipped and nested
/// objects or arrays make the whole message malformed.
pub fn deserialize_string_map<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    let mut data = BTreeMap::new();
    for (key, value) in raw {
        match value {
            Value::Null => {}
            Value::String(text) => { data.insert(key, text); }
            Value::Bool(flag) => { data.insert(key, flag.to_string()); }
            Value::Number(number) => { data.insert(key, number.to_string()); }
            Value::Array(_) | Value::Object(_) => {
                return Err(serde::de::Error::custom(format!("data field '{key}' is not a scalar")));
            }
        }
    }
    Ok(Some(data))
}

/// Joins a host and a port into a `host:port` endpoint, bracketing IPv6 literals.
pub fn join_host_port(host: &str, port: &str) -> String
{
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
