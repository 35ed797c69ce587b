//! Command handlers.
//!
//! Each handler receives the composed [`crate::CliContext`] and
//! delegates domain work to the core services; handlers own only the
//! terminal interaction.

pub mod departments;
pub mod object;
pub mod search;
