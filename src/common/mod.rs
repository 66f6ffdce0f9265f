//! Common types and utilities shared across the loader, parsers and renderer.

// Submodule declarations
pub mod error;
pub mod format;
#[cfg(feature = "xml")]
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use format::ContentFormat;
