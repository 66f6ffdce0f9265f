//! XML helpers shared by the XMind 8 content parser.
//!
//! Element names are reduced to their local part when the tree is built, so
//! every lookup in [`Element`] compares local names only and namespace
//! prefixes never matter.

mod element;
mod escape;

pub use element::Element;
pub use escape::{resolve_entity, unescape_references, unescape_xml};
