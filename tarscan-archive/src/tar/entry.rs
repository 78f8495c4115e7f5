//! Scanned archive entries.
//!
//! A [`TarEntry`] is the metadata record produced for each header during a
//! scan. It keeps a weak link back to the archive it came from: the entry
//! never keeps the underlying stream alive, and reading content after the
//! archive is closed fails with [`TarError::Closed`].

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};
use std::sync::Weak;

use tarscan_core::block::{BLOCK_SIZE_U64, padded_size};
use tarscan_core::entry::EntryKind;
use tarscan_core::error::{Result, TarError};
use tracing::{trace, warn};

use super::Source;
use super::header::TarHeader;

/// A file, directory, link or other item found in a tar archive.
pub struct TarEntry<R> {
    path: String,
    kind: EntryKind,
    mode: u32,
    size: u64,
    header_offset: u64,
    read_position: u64,
    base: u64,
    archive: Weak<Source<R>>,
}

impl<R> TarEntry<R> {
    pub(super) fn new(
        header: TarHeader,
        header_offset: u64,
        base: u64,
        archive: Weak<Source<R>>,
    ) -> Self {
        Self {
            path: header.name,
            kind: header.kind,
            mode: header.mode,
            size: header.size,
            header_offset,
            read_position: 0,
            base,
            archive,
        }
    }

    /// Name of the archived item.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// What the entry is.
    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// Link target, for hard and symbolic links.
    pub fn link_target(&self) -> Option<&str> {
        self.kind.link_target()
    }

    /// Permission bits.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Declared content size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Archive-relative offset of this entry's header block.
    pub fn header_offset(&self) -> u64 {
        self.header_offset
    }

    /// Archive-relative offset of the first content byte.
    pub fn data_offset(&self) -> u64 {
        self.header_offset + BLOCK_SIZE_U64
    }

    /// Content bytes including block padding.
    pub fn padded_size(&self) -> u64 {
        padded_size(self.size)
    }

    /// Position of the content read cursor.
    pub fn read_position(&self) -> u64 {
        self.read_position
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this is a hard or symbolic link.
    pub fn is_link(&self) -> bool {
        self.kind.is_link()
    }

    /// Reset the content read cursor to the start of the entry.
    pub fn rewind(&mut self) {
        self.read_position = 0;
    }
}

impl<R: Read + Seek> TarEntry<R> {
    /// Read content bytes at the current cursor.
    ///
    /// Never reads past the declared size; returns `Ok(0)` once the cursor
    /// reaches it. Fails with [`TarError::Closed`] if the archive has been
    /// closed or dropped, and with [`TarError::ShortRead`] if the stream ends
    /// before the declared size.
    pub fn read_content(&mut self, buf: &mut [u8]) -> Result<usize> {
        let source = self.archive.upgrade().ok_or(TarError::Closed)?;
        let mut guard = super::lock(&source);
        let reader = guard.as_mut().ok_or(TarError::Closed)?;

        let remaining = self.size - self.read_position;
        if remaining == 0 || buf.is_empty() {
            return Ok(0);
        }
        let want = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));

        let position = self
            .base
            .checked_add(self.data_offset())
            .and_then(|p| p.checked_add(self.read_position))
            .ok_or_else(|| TarError::offset_overflow(self.header_offset))?;
        reader.seek(SeekFrom::Start(position))?;

        let n = reader.read(&mut buf[..want])?;
        trace!(path = %self.path, position, n, "read entry content");
        if n == 0 {
            warn!(path = %self.path, position, size = self.size, "entry content truncated");
            return Err(TarError::short_read(
                &self.path,
                usize::try_from(self.size).unwrap_or(usize::MAX),
                usize::try_from(self.read_position).unwrap_or(usize::MAX),
            ));
        }
        self.read_position += n as u64;
        Ok(n)
    }

    /// Read the whole remaining content into a vector.
    pub fn read_to_vec(&mut self) -> Result<Vec<u8>> {
        let remaining = self.size - self.read_position;
        let mut data = Vec::with_capacity(usize::try_from(remaining).unwrap_or(0).min(1 << 20));
        let mut buffer = [0u8; 8192];
        loop {
            let n = self.read_content(&mut buffer)?;
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buffer[..n]);
        }
        Ok(data)
    }
}

impl<R: Read + Seek> Read for TarEntry<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_content(buf).map_err(io::Error::from)
    }
}

impl<R> Clone for TarEntry<R> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            kind: self.kind.clone(),
            mode: self.mode,
            size: self.size,
            header_offset: self.header_offset,
            read_position: self.read_position,
            base: self.base,
            archive: Weak::clone(&self.archive),
        }
    }
}

impl<R> fmt::Debug for TarEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TarEntry")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("mode", &format_args!("{:o}", self.mode))
            .field("size", &self.size)
            .field("header_offset", &self.header_offset)
            .field("read_position", &self.read_position)
            .finish_non_exhaustive()
    }
}

impl<R> fmt::Display for TarEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:04o} {:>10} {:>10} {}",
            self.kind.type_char(),
            self.mode,
            self.size,
            self.header_offset,
            self.path
        )?;
        if let Some(target) = self.link_target() {
            write!(f, " -> {}", target)?;
        }
        Ok(())
    }
}
