//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired
//! together for the CLI adapter: the Met client is instantiated here
//! and handed to handlers behind the `CollectionPort` trait.

use std::sync::Arc;

use galleria_core::{CollectionPort, GalleryService};
use galleria_met::{DefaultMetClient, MetClientConfig};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Optional base URL override (flag or `GALLERIA_BASE_URL`).
    pub base_url: Option<String>,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The collection API behind its port.
    pub collection: Arc<dyn CollectionPort>,
    /// Gallery orchestration over the same port.
    pub gallery: GalleryService,
}

/// Compose the CLI context from configuration.
#[must_use]
pub fn bootstrap(config: &CliConfig) -> CliContext {
    let mut client_config = MetClientConfig::new();
    if let Some(ref base_url) = config.base_url {
        client_config = client_config.with_base_url(base_url.clone());
    }

    let collection: Arc<dyn CollectionPort> = Arc::new(DefaultMetClient::new(&client_config));
    let gallery = GalleryService::new(collection.clone());

    CliContext {
        collection,
        gallery,
    }
}
