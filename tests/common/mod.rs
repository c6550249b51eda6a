#![allow(dead_code)]
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use sobani::config::structs::configuration::Configuration;
use sobani::session::enums::session_event::SessionEvent;
use sobani::tracker::enums::tracker_action::TrackerAction;
use sobani::tracker::structs::tracker_message::TrackerMessage;
use sobani::tracker::tracker::{DATA_IP, DATA_PEER_SHARE_ID, DATA_PORT, DATA_SHARE_ID, MAX_PACKET_SIZE};

pub type TestConfig = Arc<Configuration>;

#[derive(Debug, Clone, Copy)]
pub struct FakeTrackerBehaviour {
    pub answer_announce: bool,
    pub answer_push: bool,
}

impl Default for FakeTrackerBehaviour {
    fn default() -> Self {
        FakeTrackerBehaviour {
            answer_announce: true,
            answer_push: true,
        }
    }
}

#[derive(Default)]
struct Registry {
    peers: HashMap<String, SocketAddr>,
    received: Vec<(TrackerMessage, SocketAddr)>,
    next_id: u32,
}

/// Loopback tracker speaking the JSON protocol.
///
/// Announces get `peer-<n>` ids. A push for a registered peer is answered with that
/// peer's socket address and the peer is told about the pusher with an `income` message.
pub struct FakeTracker {
    pub address: SocketAddr,
    socket: Arc<UdpSocket>,
    registry: Arc<Mutex<Registry>>,
    task: JoinHandle<()>,
}

impl FakeTracker {
    pub async fn start() -> FakeTracker {
        FakeTracker::with_behaviour(FakeTrackerBehaviour::default()).await
    }

    pub async fn with_behaviour(behaviour: FakeTrackerBehaviour) -> FakeTracker {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.expect("Failed to bind fake tracker"));
        let address = socket.local_addr().expect("Fake tracker has no local address");
        let registry = Arc::new(Mutex::new(Registry::default()));
        let task = tokio::spawn(serve(socket.clone(), registry.clone(), behaviour));
        FakeTracker { address, socket, registry, task }
    }

    /// Sends raw bytes to a peer as if the tracker wrote them.
    pub async fn inject(&self, payload: &[u8], to: SocketAddr) {
        self.socket.send_to(payload, to).await.expect("Failed to inject datagram");
    }

    pub fn count(&self, action: TrackerAction) -> usize {
        self.registry.lock().received.iter().filter(|(message, _)| message.action == action).count()
    }

    pub fn received(&self) -> Vec<TrackerMessage> {
        self.registry.lock().received.iter().map(|(message, _)| message.clone()).collect()
    }
}

impl Drop for FakeTracker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(socket: Arc<UdpSocket>, registry: Arc<Mutex<Registry>>, behaviour: FakeTrackerBehaviour) {
    let mut buffer = [0u8; MAX_PACKET_SIZE];
    loop {
        let Ok((size, from)) = socket.recv_from(&mut buffer).await else {
            return;
        };
        let Ok(message) = TrackerMessage::decode(&buffer[..size]) else {
            continue;
        };
        let replies = {
            let mut registry = registry.lock();
            registry.received.push((message.clone(), from));
            respond(&mut registry, &message, from, behaviour)
        };
        for (reply, to) in replies {
            if let Ok(bytes) = reply.encode() {
                let _ = socket.send_to(&bytes, to).await;
            }
        }
    }
}

fn share_id_at(registry: &Registry, address: SocketAddr) -> Option<String> {
    registry.peers.iter().find(|(_, known)| **known == address).map(|(share_id, _)| share_id.clone())
}

fn respond(
    registry: &mut Registry,
    message: &TrackerMessage,
    from: SocketAddr,
    behaviour: FakeTrackerBehaviour,
) -> Vec<(TrackerMessage, SocketAddr)> {
    match message.action {
        TrackerAction::Announce if behaviour.answer_announce => {
            let share_id = match share_id_at(registry, from) {
                Some(share_id) => share_id,
                None => {
                    registry.next_id += 1;
                    let share_id = format!("peer-{}", registry.next_id);
                    registry.peers.insert(share_id.clone(), from);
                    share_id
                }
            };
            vec![(TrackerMessage::announce_received(&share_id), from)]
        }
        TrackerAction::Push if behaviour.answer_push => {
            let Some(target) = message.share_id.clone() else {
                return Vec::new();
            };
            let Some(target_address) = registry.peers.get(&target).copied() else {
                return Vec::new();
            };
            let pusher = share_id_at(registry, from).unwrap_or_default();

            let answer = TrackerMessage::new(TrackerAction::PushReceived)
                .with_data(DATA_SHARE_ID, &target)
                .with_data(DATA_IP, &target_address.ip().to_string())
                .with_data(DATA_PORT, &target_address.port().to_string());
            let income = TrackerMessage::new(TrackerAction::Income)
                .with_data(DATA_PEER_SHARE_ID, &pusher)
                .with_data(DATA_IP, &from.ip().to_string())
                .with_data(DATA_PORT, &from.port().to_string());
            vec![(answer, from), (income, target_address)]
        }
        _ => Vec::new(),
    }
}

/// Loopback configuration with short timers so the tests run in a few seconds.
pub fn create_test_config(tracker: SocketAddr) -> TestConfig {
    let mut config = Configuration::init();
    config.log_console_interval = 0;
    config.tracker.address = tracker.to_string();
    config.tracker.announce_timeout = 2;
    config.tracker.announce_retry_interval = 1;
    config.tracker.keepalive_interval = 1;
    config.negotiator.retry_interval = 1;
    config.negotiator.resolve_timeout = 3;
    config.peer.bind_address = String::from("127.0.0.1");
    Arc::new(config)
}

/// Next event that is not an `Announced` notice, or None after two seconds.
pub async fn next_notice(events: &mut mpsc::UnboundedReceiver<SessionEvent>) -> Option<SessionEvent> {
    loop {
        match tokio::time::timeout(Duration::from_secs(2), events.recv()).await {
            Ok(Some(SessionEvent::Announced(_))) => continue,
            Ok(event) => return event,
            Err(_) => return None,
        }
    }
}
