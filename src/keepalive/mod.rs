//! Keepalive module.
//!
//! Once the announce succeeded, a pulse goes to the tracker every
//! `keepalive_interval` seconds so it keeps mapping our ShareID to our current
//! endpoint. The first pulse is sent one interval after start.
//!
//! A failed send is logged and counted, the next tick tries again. Errors that
//! mean the registration is gone (client closed, not announced) end the loop
//! with that error so the session can report it.

/// Implementation blocks for the keepalive loop.
pub mod impls;

/// Keepalive data structures.
pub mod structs;
