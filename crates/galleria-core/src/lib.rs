//! Core domain types, port definitions and services for galleria.
//!
//! This crate holds everything the rest of the workspace agrees on:
//! the domain entities fetched from the remote collection API, the
//! `CollectionPort` trait that adapters implement, and the two services
//! that orchestrate them (catalog loading and gallery assembly).
//!
//! No I/O happens here - the concrete HTTP adapter lives in
//! `galleria-met` and is injected through the port.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ALL_DEPARTMENTS, Artwork, Department, DepartmentCatalog, SearchHits, UNKNOWN_ARTIST, UNTITLED,
};
pub use ports::{CollectionError, CollectionPort, CollectionResult};
pub use services::{
    DEFAULT_COLUMNS, DEFAULT_DISPLAY_COUNT, Gallery, GalleryCard, GalleryError, GalleryRequest,
    GalleryService, MAX_DISPLAY_COUNT, load_catalog,
};
