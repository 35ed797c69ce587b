//! Core services orchestrating the collection port.

mod catalog;
mod gallery;

pub use catalog::load_catalog;
pub use gallery::{
    DEFAULT_COLUMNS, DEFAULT_DISPLAY_COUNT, Gallery, GalleryCard, GalleryError, GalleryRequest,
    GalleryService, MAX_DISPLAY_COUNT, MIN_DISPLAY_COUNT,
};
