//! Raw content entry extracted from a package.

use crate::common::format::ContentFormat;
use crate::common::Result;
use crate::model::Document;

/// Bytes of the content entry, tagged with the format they are encoded in.
///
/// The variant is decided once by the loader; parsing dispatches on it and
/// nothing downstream inspects the format again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Bytes of `content.json`
    Json(Vec<u8>),
    /// Bytes of `content.xml`
    Xml(Vec<u8>),
}

impl Content {
    /// Wrap raw entry bytes for the given format.
    pub fn new(format: ContentFormat, data: Vec<u8>) -> Self {
        match format {
            ContentFormat::Json => Content::Json(data),
            ContentFormat::Xml => Content::Xml(data),
        }
    }

    /// Format of the wrapped bytes.
    #[inline]
    pub fn format(&self) -> ContentFormat {
        match self {
            Content::Json(_) => ContentFormat::Json,
            Content::Xml(_) => ContentFormat::Xml,
        }
    }

    /// Raw entry bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Content::Json(data) | Content::Xml(data) => data,
        }
    }

    /// Parse the content into an outline document.
    pub fn parse(&self) -> Result<Document> {
        match self {
            #[cfg(feature = "json")]
            Content::Json(data) => crate::xmind::parse::<crate::xmind::JsonParser>(data),
            #[cfg(feature = "xml")]
            Content::Xml(data) => crate::xmind::parse::<crate::xmind::XmlParser>(data),
            #[allow(unreachable_patterns)]
            other => Err(crate::common::Error::FeatureDisabled(
                other.format().feature_name().to_string(),
            )),
        }
    }
}
