//! Connect negotiation module.
//!
//! Resolving a remote ShareID means asking the tracker with `push` until it
//! answers with `pushReceived`. Datagrams get lost, so the push is re-sent on a
//! fixed interval inside a bounded budget.
//!
//! # States
//!
//! ```text
//! Idle -> Requesting -> Resolved
//!                    \-> Abandoned (cancelled, budget exhausted, session closed)
//! ```
//!
//! # Attempts
//!
//! A push is sent on entering `Requesting` and once per retry interval after
//! that. An attempt is only started when its whole retry window fits inside the
//! budget, which gives `max(1, floor(budget / retry))` attempts, optionally
//! capped by `max_attempts`. Once the attempts are used up the negotiator still
//! accepts a late answer until the budget runs out.
//!
//! A negotiator is used for exactly one target.

/// Negotiator states, abandon reasons and errors.
pub mod enums;

/// Implementation blocks for the negotiator.
pub mod impls;

/// Negotiator data structures.
pub mod structs;
