//! Museum collection API port.

mod client;
mod error;

pub use client::CollectionPort;
pub use error::{CollectionError, CollectionResult};

#[cfg(test)]
pub use client::MockCollectionPort;
