//! Sheets and documents.

use super::topic::Topic;
use crate::common::format::ContentFormat;

/// One canvas of a mind map: a title and its root topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    title: String,
    root: Topic,
}

impl Sheet {
    /// Create a sheet from its title and root topic.
    pub fn new(title: impl Into<String>, root: Topic) -> Self {
        Self {
            title: title.into().trim().to_string(),
            root,
        }
    }

    /// Sheet title; may be empty.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Root topic of the sheet (depth 0).
    #[inline]
    pub fn root(&self) -> &Topic {
        &self.root
    }

    /// Number of topics on the sheet, root included.
    pub fn topic_count(&self) -> usize {
        self.root.walk().count()
    }
}

/// A parsed mind map.
///
/// The outline is identical whichever content format it came from; the
/// format is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sheets: Vec<Sheet>,
    format: ContentFormat,
}

impl Document {
    /// Create a document from parsed sheets.
    pub fn new(sheets: Vec<Sheet>, format: ContentFormat) -> Self {
        Self { sheets, format }
    }

    /// Sheets in source order.
    #[inline]
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Content format the document was parsed from.
    #[inline]
    pub fn format(&self) -> ContentFormat {
        self.format
    }
}
