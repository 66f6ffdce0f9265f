//! Configuration types for Markdown conversion.
//!
//! This module defines the options used to customize how an outline is
//! rendered.

/// Configuration options for Markdown conversion.
///
/// Every annotation kind is included by default and depth is unlimited.
///
/// # Examples
///
/// ```rust
/// use xmind2md::markdown::MarkdownOptions;
///
/// // Create with defaults
/// let options = MarkdownOptions::default();
///
/// // Or customize
/// let options = MarkdownOptions::new()
///     .with_notes(false)
///     .with_max_depth(Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Whether to render topic notes as blockquotes
    pub include_notes: bool,
    /// Whether to append labels as inline code
    pub include_labels: bool,
    /// Whether to append marker ids as `<marker-id>` tokens
    pub include_markers: bool,
    /// How many levels below the root topic to emit (`None` = unlimited).
    ///
    /// `Some(0)` keeps only the root's direct children.
    pub max_depth: Option<usize>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            include_notes: true,
            include_labels: true,
            include_markers: true,
            max_depth: None,
        }
    }
}

impl MarkdownOptions {
    /// Create a new `MarkdownOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include topic notes.
    #[inline]
    pub fn with_notes(mut self, include: bool) -> Self {
        self.include_notes = include;
        self
    }

    /// Set whether to include topic labels.
    #[inline]
    pub fn with_labels(mut self, include: bool) -> Self {
        self.include_labels = include;
        self
    }

    /// Set whether to include topic markers.
    #[inline]
    pub fn with_markers(mut self, include: bool) -> Self {
        self.include_markers = include;
        self
    }

    /// Limit how many levels below the root topic are rendered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xmind2md::markdown::MarkdownOptions;
    ///
    /// // Only the root heading and its direct children
    /// let options = MarkdownOptions::new().with_max_depth(Some(0));
    /// assert_eq!(options.max_depth, Some(0));
    /// ```
    #[inline]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether a topic at `depth` below the root (root = 0) is rendered.
    #[inline]
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        depth == 0 || self.max_depth.is_none_or(|max| depth - 1 <= max)
    }
}
