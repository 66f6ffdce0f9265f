//! Content parsers for the two XMind package formats.
//!
//! Each parser implements [`ParseToOutline`] and produces the same
//! [`Sheet`]/[`Topic`](crate::model::Topic) tree; the renderer never learns
//! which one ran. Dispatch happens once, on the [`Content`](crate::Content)
//! variant chosen by the loader.

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "xml")]
mod xml;

#[cfg(feature = "json")]
pub use json::JsonParser;
#[cfg(feature = "xml")]
pub use xml::XmlParser;

use crate::common::format::ContentFormat;
use crate::common::Result;
use crate::model::{Document, Sheet};

/// A parser turning one content encoding into outline sheets.
pub trait ParseToOutline {
    /// Format this parser reads.
    const FORMAT: ContentFormat;

    /// Parse raw entry bytes into sheets, in source order.
    fn parse_sheets(data: &[u8]) -> Result<Vec<Sheet>>;
}

/// Parse raw entry bytes with parser `P` into a [`Document`].
pub fn parse<P: ParseToOutline>(data: &[u8]) -> Result<Document> {
    let sheets = P::parse_sheets(data)?;
    log::debug!(
        "parsed {} sheet(s) with {} topic(s) from {}",
        sheets.len(),
        sheets.iter().map(Sheet::topic_count).sum::<usize>(),
        P::FORMAT.entry_name()
    );
    Ok(Document::new(sheets, P::FORMAT))
}
