//! Port definitions.
//!
//! Ports are the traits the core depends on; adapters implement them.

pub mod collection;

pub use collection::{CollectionError, CollectionPort, CollectionResult};
