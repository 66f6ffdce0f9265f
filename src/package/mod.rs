//! Container loading for `.xmind` packages.
//!
//! [`Package`] opens the ZIP container and extracts whichever content entry it
//! carries as a [`Content`] value, ready to be parsed.

mod content;
#[allow(clippy::module_inception)]
mod package;

pub use content::Content;
pub use package::Package;
