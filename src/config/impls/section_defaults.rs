use crate::config::structs::configuration::Configuration;
use crate::config::structs::negotiator_config::NegotiatorConfig;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            address: String::from("127.0.0.1:3000"),
            announce_timeout: 30,
            announce_retry_interval: 5,
            keepalive_interval: 30,
        }
    }
}

impl Default for NegotiatorConfig {
    fn default() -> Self {
        NegotiatorConfig {
            retry_interval: 10,
            resolve_timeout: 120,
            max_attempts: None,
        }
    }
}

impl Default for PeerConfig {
    fn default() -> Self {
        PeerConfig {
            bind_address: String::from("0.0.0.0"),
            port: 0,
            recv_buffer_size: None,
            send_buffer_size: None,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}
