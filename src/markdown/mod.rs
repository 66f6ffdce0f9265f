//! Markdown rendering of mind-map outlines.
//!
//! This module turns a parsed [`Document`](crate::Document) into a Markdown
//! outline. It never sees the source format: JSON and XML packages with the
//! same content render to the same text.
//!
//! # Output shape
//!
//! - every sheet becomes a level-1 heading (`# Sheet`)
//! - the sheet's root topic becomes a level-2 heading (`## Root`)
//! - deeper topics become nested `- ` list items, two spaces per level
//! - hyperlinks wrap the title as `[title](url)`
//! - labels follow as inline code, markers as `<marker-id>`
//! - notes follow their topic as `> ` blockquote lines
//!
//! # Examples
//!
//! ```rust,no_run
//! use xmind2md::{Document, markdown::{MarkdownOptions, ToMarkdown}};
//!
//! # fn main() -> Result<(), xmind2md::Error> {
//! let doc = Document::open("plan.xmind")?;
//!
//! let options = MarkdownOptions::new()
//!     .with_notes(false)           // Drop blockquoted notes
//!     .with_max_depth(Some(2));     // Three list levels below the root
//!
//! let markdown = doc.to_markdown_with_options(&options);
//! # Ok(())
//! # }
//! ```

// Module declarations
mod config;
mod document;
mod escape;
mod traits;
mod writer;

// Re-export public API
pub use config::MarkdownOptions;
pub use escape::{code_span, escape_text, escape_url};
pub use traits::ToMarkdown;
