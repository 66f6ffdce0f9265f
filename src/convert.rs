//! Conversion entry points.
//!
//! Each call runs the whole pipeline on its own: open the package, read the
//! content entry, parse it into a [`Document`] and render Markdown. Nothing is
//! shared between calls.

use crate::common::Result;
use crate::markdown::{MarkdownOptions, ToMarkdown};
use crate::model::Document;
use crate::package::Package;
use std::path::Path;

impl Document {
    /// Open and parse an `.xmind` file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use xmind2md::Document;
    ///
    /// # fn main() -> Result<(), xmind2md::Error> {
    /// let doc = Document::open("plan.xmind")?;
    /// for sheet in doc.sheets() {
    ///     println!("{} ({} topics)", sheet.title(), sheet.topic_count());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Package::open(path)?.content().parse()
    }

    /// Parse an `.xmind` package held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Package::from_bytes(bytes)?.content().parse()
    }
}

/// Convert the `.xmind` file at `path` to Markdown.
///
/// Fails on container, lookup or parse errors; rendering itself cannot fail.
pub fn convert<P: AsRef<Path>>(path: P, options: &MarkdownOptions) -> Result<String> {
    Ok(Document::open(path)?.to_markdown_with_options(options))
}

/// Convert an in-memory `.xmind` package to Markdown.
pub fn convert_bytes(bytes: &[u8], options: &MarkdownOptions) -> Result<String> {
    Ok(Document::from_bytes(bytes)?.to_markdown_with_options(options))
}

/// Convert `input` to Markdown and, when `output` is given, also write it there
/// as UTF-8.
///
/// # Examples
///
/// ```no_run
/// use xmind2md::{convert_to_markdown, markdown::MarkdownOptions};
/// use std::path::Path;
///
/// # fn main() -> Result<(), xmind2md::Error> {
/// let options = MarkdownOptions::new().with_markers(false);
/// let markdown = convert_to_markdown("plan.xmind", Some(Path::new("plan.md")), &options)?;
/// println!("{} lines", markdown.lines().count());
/// # Ok(())
/// # }
/// ```
pub fn convert_to_markdown<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
    options: &MarkdownOptions,
) -> Result<String> {
    let markdown = convert(input, options)?;
    if let Some(output) = output {
        std::fs::write(output, &markdown)?;
        log::debug!("wrote {} bytes to {}", markdown.len(), output.display());
    }
    Ok(markdown)
}
