//! Content format enumeration.

use std::fmt;

/// Archive entry holding the XMind 2020/Zen content description.
pub const JSON_CONTENT_ENTRY: &str = "content.json";

/// Archive entry holding the XMind 8 content description.
pub const XML_CONTENT_ENTRY: &str = "content.xml";

/// Encoding of the content entry found inside an `.xmind` package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFormat {
    /// XMind 2020/Zen package (`content.json`)
    Json,
    /// XMind 8 package (`content.xml`)
    Xml,
}

impl ContentFormat {
    /// Name of the archive entry this format is stored in.
    #[inline]
    pub const fn entry_name(self) -> &'static str {
        match self {
            ContentFormat::Json => JSON_CONTENT_ENTRY,
            ContentFormat::Xml => XML_CONTENT_ENTRY,
        }
    }

    /// Cargo feature that enables the parser for this format.
    #[inline]
    pub const fn feature_name(self) -> &'static str {
        match self {
            ContentFormat::Json => "json",
            ContentFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_names() {
        assert_eq!(ContentFormat::Json.entry_name(), "content.json");
        assert_eq!(ContentFormat::Xml.entry_name(), "content.xml");
    }

    #[test]
    fn test_display_matches_feature() {
        assert_eq!(ContentFormat::Json.to_string(), "json");
        assert_eq!(ContentFormat::Xml.to_string(), "xml");
    }
}
