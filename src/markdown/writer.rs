//! Low-level writer for Markdown generation.
//!
//! This module provides the `MarkdownWriter` struct which turns sheets and
//! topics into heading, list and blockquote lines.

use super::config::MarkdownOptions;
use super::escape::{code_span, escape_text, escape_url};
use crate::model::{Sheet, Topic};

/// Spaces per list nesting level.
const INDENT_WIDTH: usize = 2;

/// Low-level writer for Markdown generation.
///
/// Every method appends complete lines to an internal buffer; trailing
/// whitespace is stripped from each line as it is written.
pub(crate) struct MarkdownWriter<'o> {
    /// The output buffer
    buffer: String,
    /// Current options
    options: &'o MarkdownOptions,
}

impl<'o> MarkdownWriter<'o> {
    /// Create a new writer with the given options.
    pub fn new(options: &'o MarkdownOptions) -> Self {
        Self {
            buffer: String::with_capacity(4096),
            options,
        }
    }

    /// Write one sheet: `# title`, `## root`, then the list of descendants.
    ///
    /// `index` is the zero-based sheet position, used for untitled sheets.
    pub fn write_sheet(&mut self, sheet: &Sheet, index: usize) {
        let title = if sheet.title().is_empty() {
            format!("Sheet {}", index + 1)
        } else {
            escape_text(sheet.title())
        };
        self.write_line(0, "# ", &title);

        let root = sheet.root();
        self.write_line(0, "## ", &self.topic_line(root));
        if self.options.include_notes
            && let Some(note) = root.note()
        {
            self.write_note(note, 0);
        }

        for child in root.children() {
            self.write_topic(child, 1);
        }
    }

    /// Write a topic at `depth` below the root as a list item, then its subtree.
    fn write_topic(&mut self, topic: &Topic, depth: usize) {
        if !self.options.allows_depth(depth) {
            return;
        }

        let indent = (depth - 1) * INDENT_WIDTH;
        self.write_line(indent, "- ", &self.topic_line(topic));
        if self.options.include_notes
            && let Some(note) = topic.note()
        {
            // Align with the item's content so the quote stays inside the item.
            self.write_note(note, indent + INDENT_WIDTH);
        }

        for child in topic.children() {
            self.write_topic(child, depth + 1);
        }
    }

    /// Write a note as blockquote lines; blank note lines become a bare `>`.
    fn write_note(&mut self, note: &str, indent: usize) {
        for line in note.lines() {
            self.write_line(indent, "> ", line);
        }
    }

    /// Title (or link) followed by the enabled label and marker suffixes.
    fn topic_line(&self, topic: &Topic) -> String {
        let title = escape_text(topic.title());
        let mut line = match topic.hyperlink() {
            Some(url) => format!("[{}]({})", title, escape_url(url)),
            None => title,
        };

        let labels = topic
            .labels()
            .iter()
            .filter(|_| self.options.include_labels)
            .map(|label| code_span(label));
        let markers = topic
            .markers()
            .iter()
            .filter(|_| self.options.include_markers)
            .map(|marker| format!("<{}>", marker));

        for suffix in labels.chain(markers) {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&suffix);
        }
        line
    }

    fn write_line(&mut self, indent: usize, prefix: &str, text: &str) {
        let start = self.buffer.len();
        self.buffer.extend(std::iter::repeat_n(' ', indent));
        self.buffer.push_str(prefix);
        self.buffer.push_str(text);
        let trimmed = self.buffer[start..].trim_end().len();
        self.buffer.truncate(start + trimmed);
        self.buffer.push('\n');
    }

    /// Append an empty line.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Finish writing and return the generated Markdown.
    ///
    /// Trailing blank lines are collapsed so non-empty output ends with exactly
    /// one newline.
    pub fn finish(mut self) -> String {
        let len = self.buffer.trim_end().len();
        self.buffer.truncate(len);
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer
    }
}
