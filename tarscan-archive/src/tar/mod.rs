//! TAR archive scanning.
//!
//! This module walks a ustar stream one 512-byte block at a time and produces
//! the ordered list of entries without reading their content:
//!
//! 1. Read one block. Fewer than 512 bytes is a short read.
//! 2. An all-zero block ends the archive.
//! 3. Verify the header checksum.
//! 4. Decode the header at the running offset.
//! 5. Seek past the content, rounded up to the next block boundary.
//!
//! A scan is all-or-nothing: any failure discards the entries decoded so far.

mod entry;
mod header;

pub use entry::TarEntry;
pub use header::TarHeader;

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tarscan_core::block::{BLOCK_SIZE, BLOCK_SIZE_U64, Block, is_end_of_archive, padded_size};
use tarscan_core::checksum;
use tarscan_core::error::{Result, TarError};
use tracing::{debug, trace, warn};

/// Shared slot holding the stream. `None` once the archive is closed.
type Source<R> = Mutex<Option<R>>;

/// Lock the stream slot. A panic while holding the lock leaves the stream
/// position arbitrary, but every scan and read seeks before touching it.
fn lock<R>(source: &Source<R>) -> MutexGuard<'_, Option<R>> {
    source.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An open tar archive.
///
/// The handle owns the stream exclusively. Entries produced by
/// [`entries`](Self::entries) only hold a weak link to it. The stream is
/// released on [`close`](Self::close) or when the handle is dropped,
/// whichever comes first.
pub struct TarArchive<R> {
    source: Arc<Source<R>>,
    identifier: String,
    base: u64,
}

impl TarArchive<BufReader<File>> {
    /// Open a tar file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let identifier = path.display().to_string();
        let file = File::open(path).map_err(|e| TarError::open(&identifier, e))?;
        Self::new(BufReader::new(file), identifier)
    }
}

impl<R: Read + Seek> TarArchive<R> {
    /// Wrap an already-open stream.
    ///
    /// Entry offsets are relative to the stream position at this call, and
    /// every scan starts from there.
    pub fn new(mut reader: R, identifier: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        let base = reader.stream_position()?;
        debug!(archive = %identifier, base, "opened tar archive");
        Ok(Self {
            source: Arc::new(Mutex::new(Some(reader))),
            identifier,
            base,
        })
    }

    /// Scan the archive and return its entries in archive order.
    ///
    /// Fails with [`TarError::Closed`] before touching the stream if the
    /// archive has been closed.
    pub fn entries(&self) -> Result<Vec<TarEntry<R>>> {
        let mut guard = lock(&self.source);
        let reader = guard.as_mut().ok_or(TarError::Closed)?;
        reader.seek(SeekFrom::Start(self.base))?;

        let link = Arc::downgrade(&self.source);
        let mut entries = Vec::new();
        let mut offset = 0u64;

        loop {
            let mut block: Block = [0u8; BLOCK_SIZE];
            let read = read_block(reader, &mut block)?;
            if read < BLOCK_SIZE {
                warn!(archive = %self.identifier, offset, read, "short read");
                return Err(TarError::short_read(&self.identifier, BLOCK_SIZE, read));
            }

            if is_end_of_archive(&block) {
                debug!(archive = %self.identifier, offset, count = entries.len(), "end of archive");
                break;
            }

            if !checksum::verify(&block) {
                let stored = checksum::stored(&block);
                let computed = checksum::compute(&block);
                warn!(archive = %self.identifier, offset, stored, computed, "checksum failure");
                return Err(TarError::checksum(offset, stored, computed));
            }

            let header = TarHeader::decode(&block);
            let padded = padded_size(header.size);
            trace!(name = %header.name, kind = %header.kind, size = header.size, offset, "header");

            let next = offset
                .checked_add(BLOCK_SIZE_U64)
                .and_then(|o| o.checked_add(padded))
                .ok_or_else(|| TarError::offset_overflow(offset))?;
            let skip = i64::try_from(padded).map_err(|_| TarError::offset_overflow(offset))?;

            entries.push(TarEntry::new(header, offset, self.base, link.clone()));
            offset = next;

            // Skip content without reading it
            reader.seek(SeekFrom::Current(skip))?;
        }

        Ok(entries)
    }
}

impl<R> TarArchive<R> {
    /// Identifier the archive was opened with, usually a path.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Check if the archive has been closed.
    pub fn is_closed(&self) -> bool {
        lock(&self.source).is_none()
    }

    /// Release the underlying stream.
    ///
    /// Closing an already closed archive does nothing.
    pub fn close(&self) {
        if lock(&self.source).take().is_some() {
            debug!(archive = %self.identifier, "closed tar archive");
        }
    }
}

impl<R> Drop for TarArchive<R> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<R> std::fmt::Debug for TarArchive<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TarArchive")
            .field("identifier", &self.identifier)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Fill `block` from `reader`, returning how many bytes were read.
///
/// Keeps reading until the block is full or the stream reports end of file,
/// so a short count always means the stream ran out.
fn read_block<R: Read>(reader: &mut R, block: &mut Block) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
