#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultMetClient is meant to be
// used through the CollectionPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod cache;
mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultMetClient;

// Configuration
pub use config::MetClientConfig;
