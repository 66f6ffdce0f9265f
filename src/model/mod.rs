//! Format-agnostic outline model.
//!
//! Both content parsers build these types, and the Markdown renderer only
//! reads them. Nothing in here knows which format a document came from apart
//! from the [`Document::format`] tag.

mod document;
mod topic;

pub use document::{Document, Sheet};
pub use topic::{Topic, Walk};
