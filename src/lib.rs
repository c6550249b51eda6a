//! # Sobani
//!
//! A peer-to-peer chat client that finds its peers through a UDP rendezvous tracker.
//!
//! ## Overview
//!
//! Two processes, each behind an address they do not know (usually a NAT), register
//! with a tracker and receive a ShareID. One side hands its ShareID to the other out of
//! band; the other side asks the tracker to resolve that ShareID into a transport
//! endpoint and opens a direct stream to it. Lines typed on one console show up on the
//! other.
//!
//! ## Protocol
//!
//! Every tracker message is a single JSON object in a single UDP datagram:
//!
//! - `{"action":"announce"}` is answered with `{"action":"announceReceived","data":{"shareId":".."}}`
//! - `{"action":"pulse","override":false,"shareId":".."}` keeps the registration fresh
//! - `{"action":"push","shareId":".."}` is answered with `{"action":"pushReceived","data":{"ip":"..","port":".."}}`
//!   once the target is reachable
//!
//! Datagrams may be lost, duplicated or reordered, so announces and pushes are re-sent on
//! an interval and every response is matched to at most one waiter.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sobani::config::structs::configuration::Configuration;
//! use sobani::session::structs::session::Session;
//! use sobani::tracker::structs::share_id::ShareId;
//!
//! let config = Arc::new(Configuration::init());
//! let (session, mut events) = Session::start(config).await?;
//! println!("my share id: {}", session.share_id().unwrap());
//!
//! let address = session.resolve_peer(ShareId::from("73756b69")).await?;
//! session.close().await;
//! ```
//!
//! ## Modules
//!
//! - [`chat`] - Line relay between a peer stream and the terminal
//! - [`config`] - Configuration management and TOML parsing
//! - [`keepalive`] - Periodic pulse task keeping the tracker registration fresh
//! - [`listener`] - Receive loop that routes tracker responses to their waiters
//! - [`negotiator`] - Retrying push state machine resolving a remote ShareID
//! - [`peers`] - In-memory directory of peers seen during a session
//! - [`session`] - Session object owning the socket and every background task
//! - [`stats`] - Atomic counters for protocol activity
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Tracker client, wire messages and the pending-request table
//! - [`transport`] - Stream establishment collaborator (TCP)

/// Line relay between a peer stream and the terminal.
pub mod chat;

/// Configuration management module.
///
/// Handles loading, parsing and validating the client configuration from TOML
/// files, and applying command line overrides.
pub mod config;

/// Keepalive module.
///
/// Sends a pulse to the tracker on a fixed interval so it does not expire the
/// mapping between our ShareID and our observed endpoint.
pub mod keepalive;

/// Response listener module.
///
/// Owns the receive direction of the tracker socket, decodes every datagram and
/// completes whichever pending request it answers.
pub mod listener;

/// Logging setup (fern + colored levels).
pub mod logging;

/// Connect negotiation module.
///
/// Resolves a remote ShareID into a transport endpoint by re-sending push
/// requests until the tracker answers or the budget runs out.
pub mod negotiator;

/// Peer book module.
///
/// Keeps track of peers resolved or announced to us during the session.
pub mod peers;

/// Session module.
///
/// Ties the tracker client, listener, keepalive and negotiator together and
/// owns their lifetime.
pub mod session;

/// Statistics tracking module.
///
/// Atomic counters for datagrams, pulses, pushes and dropped input.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Tracker client module.
///
/// Contains the UDP tracker client, the JSON wire messages and the table that
/// correlates outstanding requests with their responses.
pub mod tracker;

/// Stream transport collaborator.
///
/// Opens a direct stream to a resolved address and accepts incoming streams.
pub mod transport;
