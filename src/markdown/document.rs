//! ToMarkdown implementations for outline types.
//!
//! This module implements the `ToMarkdown` trait for [`Document`] and
//! [`Sheet`].

use super::config::MarkdownOptions;
use super::traits::ToMarkdown;
use super::writer::MarkdownWriter;
use crate::model::{Document, Sheet};

impl ToMarkdown for Document {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> String {
        let mut writer = MarkdownWriter::new(options);
        for (index, sheet) in self.sheets().iter().enumerate() {
            writer.write_sheet(sheet, index);
            // Blank line between sheets
            writer.blank_line();
        }
        writer.finish()
    }
}

impl ToMarkdown for Sheet {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> String {
        let mut writer = MarkdownWriter::new(options);
        writer.write_sheet(self, 0);
        writer.finish()
    }
}
