//! XMind package (ZIP archive) loading.
//!
//! An `.xmind` file is a ZIP container. XMind 2020/Zen stores the mind map in
//! `content.json`, XMind 8 in `content.xml`. The loader picks the entry,
//! reads it fully into memory and closes the archive before anything is parsed.

use super::content::Content;
use crate::common::format::ContentFormat;
use crate::common::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// An opened XMind package.
///
/// Holds only the extracted content entry and the list of entry names; the
/// archive handle itself does not outlive the constructor.
#[derive(Debug, Clone)]
pub struct Package {
    content: Content,
    entries: Vec<String>,
}

impl Package {
    /// Open a package from a file path.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use xmind2md::Package;
    ///
    /// # fn main() -> Result<(), xmind2md::Error> {
    /// let pkg = Package::open("plan.xmind")?;
    /// println!("content format: {}", pkg.format());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Open a package held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Open a package from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)
            .map_err(|e| Error::Container(format!("not a ZIP archive: {}", e)))?;
        let entries: Vec<String> = archive.file_names().map(str::to_string).collect();

        let format = select_format(&entries)?;
        log::debug!(
            "selected {} out of {} archive entries",
            format.entry_name(),
            entries.len()
        );

        let mut data = Vec::new();
        archive
            .by_name(format.entry_name())?
            .read_to_end(&mut data)?;

        Ok(Self {
            content: Content::new(format, data),
            entries,
        })
    }

    /// Format of the content entry.
    #[inline]
    pub fn format(&self) -> ContentFormat {
        self.content.format()
    }

    /// The extracted content entry.
    #[inline]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Consume the package, keeping only its content.
    #[inline]
    pub fn into_content(self) -> Content {
        self.content
    }

    /// Names of all entries in the archive, in central directory order.
    #[inline]
    pub fn entry_names(&self) -> &[String] {
        &self.entries
    }
}

/// Pick the content entry; `content.json` wins when both are present.
fn select_format(entries: &[String]) -> Result<ContentFormat> {
    [ContentFormat::Json, ContentFormat::Xml]
        .into_iter()
        .find(|format| entries.iter().any(|name| name == format.entry_name()))
        .ok_or_else(Error::content_not_found)
}
