pub mod tracker_message;
pub mod tracker_client;
pub mod tracker_error;
pub mod peer_record;
pub mod peer_state;
pub mod share_id;
pub mod resolved_peer_address;
pub mod pending_requests;
pub mod request_kind;
