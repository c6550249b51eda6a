//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the client configuration
//! from TOML files, and applies command line overrides on top of it.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**, **log_file**, **log_console_interval**: logging and the stats console
//! - **tracker**: tracker address, announce deadline and retry, keepalive interval
//! - **negotiator**: push retry interval, resolution budget, optional attempt cap
//! - **peer**: local bind address, port and socket buffer sizes
//!
//! Every section falls back to its defaults when missing, so a file only needs the
//! values it changes.
//!
//! # Example
//!
//! ```rust,ignore
//! use sobani::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
