//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the errors
//! of the container and content parsers to the unified Error type.

use super::types::Error;
#[cfg(any(feature = "json", feature = "xml"))]
use crate::common::format::ContentFormat;

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::Container(other.to_string()),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::parse(ContentFormat::Json, err.to_string())
    }
}

#[cfg(feature = "xml")]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::parse(ContentFormat::Xml, err.to_string())
    }
}
