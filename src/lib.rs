//! xmind2md - Convert XMind mind maps into Markdown outlines
//!
//! This library reads `.xmind` packages written by XMind 8 (`content.xml`) and
//! XMind 2020/Zen (`content.json`), builds one format-agnostic outline tree
//! and renders it as Markdown.
//!
//! # Features
//!
//! - **Both package formats**: JSON and XML content parse into the same
//!   [`Document`], so both render to identical Markdown
//! - **Annotations**: notes, labels, markers and hyperlinks are kept
//! - **Configurable output**: depth limit and per-annotation toggles
//! - **All-or-nothing**: a conversion returns the full text or an [`Error`]
//!
//! # Example - One-shot conversion
//!
//! ```no_run
//! use xmind2md::{convert, markdown::MarkdownOptions};
//!
//! # fn main() -> Result<(), xmind2md::Error> {
//! let markdown = convert("plan.xmind", &MarkdownOptions::default())?;
//! println!("{}", markdown);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting the outline
//!
//! ```no_run
//! use xmind2md::{Document, markdown::ToMarkdown};
//!
//! # fn main() -> Result<(), xmind2md::Error> {
//! let doc = Document::open("plan.xmind")?;
//! println!("parsed from {}", doc.format());
//!
//! for sheet in doc.sheets() {
//!     for (depth, topic) in sheet.root().walk() {
//!         println!("{}{}", "  ".repeat(depth), topic.title());
//!     }
//! }
//!
//! let markdown = doc.to_markdown();
//! # Ok(())
//! # }
//! ```

/// Shared error, format and XML utilities
pub mod common;

/// Markdown rendering of outlines
pub mod markdown;

/// Format-agnostic outline model
pub mod model;

/// `.xmind` container loading
pub mod package;

/// Content parsers for the JSON and XML package formats
pub mod xmind;

mod convert;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use common::{ContentFormat, Error, Result};
pub use convert::{convert, convert_bytes, convert_to_markdown};
pub use markdown::{MarkdownOptions, ToMarkdown};
pub use model::{Document, Sheet, Topic};
pub use package::{Content, Package};
