//! Unified error types for xmind2md.
//!
//! Container, lookup and parse failures from both content formats are
//! presented through a single error type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
