//! Unified error types for xmind2md.
//!
//! Every failure of a conversion call surfaces as one of these variants. There
//! is no partial output: a conversion either yields the whole Markdown text or
//! an `Error`.
use crate::common::format::ContentFormat;
use thiserror::Error;

/// Main error type for xmind2md operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (missing input, permission denied, unwritable output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a readable ZIP container
    #[error("Invalid container: {0}")]
    Container(String),

    /// Neither recognised content entry is present in the container
    #[error(
        "Content not found: the package contains neither {json} nor {xml}; \
         re-save the mind map in XMind and try again"
    )]
    ContentNotFound {
        json: &'static str,
        xml: &'static str,
    },

    /// The content entry exists but does not have the expected shape
    #[error("Parse error ({format}): {message}")]
    Parse {
        format: ContentFormat,
        message: String,
    },

    /// Parser for this content format was disabled at compile time
    #[error("Feature '{0}' is disabled. Enable it with --features {0}")]
    FeatureDisabled(String),
}

impl Error {
    /// Build a [`Error::Parse`] for the given format.
    pub(crate) fn parse(format: ContentFormat, message: impl Into<String>) -> Self {
        Error::Parse {
            format,
            message: message.into(),
        }
    }

    /// Build a [`Error::ContentNotFound`] naming both searched entries.
    pub(crate) fn content_not_found() -> Self {
        Error::ContentNotFound {
            json: ContentFormat::Json.entry_name(),
            xml: ContentFormat::Xml.entry_name(),
        }
    }
}

/// Result type for xmind2md operations.
pub type Result<T> = std::result::Result<T, Error>;
