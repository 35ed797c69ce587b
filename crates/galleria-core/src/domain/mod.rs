//! Domain entities for the museum collection.
//!
//! All three entities are read-only snapshots of what the remote API
//! returns; nothing in this system creates or mutates them.

mod artwork;
mod department;
mod search;

pub use artwork::{Artwork, UNKNOWN_ARTIST, UNTITLED};
pub use department::{ALL_DEPARTMENTS, Department, DepartmentCatalog};
pub use search::SearchHits;
