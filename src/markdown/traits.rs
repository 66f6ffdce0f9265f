//! Core trait for Markdown conversion.
//!
//! This module defines the `ToMarkdown` trait that enables types to be
//! converted to Markdown format.

use super::config::MarkdownOptions;

/// Core trait for types that can be converted to Markdown.
///
/// Rendering works on an already parsed outline and cannot fail: the same
/// value and options always produce byte-identical text.
///
/// # Examples
///
/// ```rust,no_run
/// use xmind2md::{Document, markdown::ToMarkdown};
///
/// # fn main() -> Result<(), xmind2md::Error> {
/// let doc = Document::open("plan.xmind")?;
///
/// // Convert the whole mind map
/// let markdown = doc.to_markdown();
///
/// // Or a single sheet
/// for sheet in doc.sheets() {
///     println!("{}", sheet.to_markdown());
/// }
/// # Ok(())
/// # }
/// ```
pub trait ToMarkdown {
    /// Convert this item to Markdown with default options.
    fn to_markdown(&self) -> String {
        self.to_markdown_with_options(&MarkdownOptions::default())
    }

    /// Convert this item to Markdown with custom options.
    ///
    /// # Arguments
    ///
    /// * `options` - Configuration for the conversion
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> String;
}
