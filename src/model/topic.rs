//! Topic nodes of the outline tree.

/// One node of a mind-map outline.
///
/// A topic owns its children, so the outline is a tree by construction: no
/// topic can be shared between two parents and no cycle can be formed. Once
/// built, a topic is only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topic {
    title: String,
    children: Vec<Topic>,
    note: Option<String>,
    labels: Vec<String>,
    markers: Vec<String>,
    hyperlink: Option<String>,
}

impl Topic {
    /// Create a topic with the given title and no annotations.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            ..Self::default()
        }
    }

    /// Append a child topic.
    pub fn with_child(mut self, child: Topic) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child topics, keeping their order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Topic>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach a note. Blank notes are treated as absent.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = normalize_note(&note.into());
        self.note = (!note.is_empty()).then_some(note);
        self
    }

    /// Add a label. Blank and duplicate labels are ignored.
    pub fn with_label(mut self, label: impl AsRef<str>) -> Self {
        push_unique(&mut self.labels, label.as_ref());
        self
    }

    /// Add several labels, keeping their order.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            push_unique(&mut self.labels, label.as_ref());
        }
        self
    }

    /// Add a marker id (e.g. `priority-1`). Blank and duplicate ids are ignored.
    pub fn with_marker(mut self, marker: impl AsRef<str>) -> Self {
        push_unique(&mut self.markers, marker.as_ref());
        self
    }

    /// Add several marker ids, keeping their order.
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for marker in markers {
            push_unique(&mut self.markers, marker.as_ref());
        }
        self
    }

    /// Attach a hyperlink. Blank URLs are treated as absent.
    pub fn with_hyperlink(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let url = url.trim();
        self.hyperlink = (!url.is_empty()).then(|| url.to_string());
        self
    }

    /// Title text; may be empty.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Child topics in source order.
    #[inline]
    pub fn children(&self) -> &[Topic] {
        &self.children
    }

    /// Note text, if any.
    #[inline]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Labels in source order.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Marker ids in source order.
    #[inline]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Hyperlink URL, if any.
    #[inline]
    pub fn hyperlink(&self) -> Option<&str> {
        self.hyperlink.as_deref()
    }

    /// Depth-first walk over this topic and its descendants.
    ///
    /// Yields `(depth, topic)` pairs where this topic has depth `0` and every
    /// child is one deeper than its parent.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Iterator returned by [`Topic::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Topic)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Topic);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, topic) = self.stack.pop()?;
        self.stack
            .extend(topic.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, topic))
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Normalise line endings, drop whitespace in front of line breaks and trim.
fn normalize_note(note: &str) -> String {
    let note = note.replace("\r\n", "\n").replace('\r', "\n");
    note.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order_and_skips_duplicates() {
        let topic = Topic::new("Plan")
            .with_labels(["b", "a", "b", "  "])
            .with_marker("priority-1")
            .with_marker("priority-1")
            .with_marker("task-done");
        assert_eq!(topic.labels(), ["b", "a"]);
        assert_eq!(topic.markers(), ["priority-1", "task-done"]);
    }

    #[test]
    fn test_note_normalisation() {
        let topic = Topic::new("").with_note("  first  \r\n\r\nsecond\t\n");
        assert_eq!(topic.note(), Some("first\n\nsecond"));
        assert_eq!(Topic::new("").with_note(" \n ").note(), None);
    }

    #[test]
    fn test_blank_hyperlink_is_absent() {
        assert_eq!(Topic::new("x").with_hyperlink("  ").hyperlink(), None);
        assert_eq!(
            Topic::new("x").with_hyperlink(" https://a.example ").hyperlink(),
            Some("https://a.example")
        );
    }

    #[test]
    fn test_walk_is_depth_first_preorder() {
        let root = Topic::new("r")
            .with_child(Topic::new("a").with_child(Topic::new("a1")))
            .with_child(Topic::new("b"));
        let visited: Vec<_> = root.walk().map(|(d, t)| (d, t.title())).collect();
        assert_eq!(visited, vec![(0, "r"), (1, "a"), (2, "a1"), (1, "b")]);
    }
}
