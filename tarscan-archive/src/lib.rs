//! # tarscan Archive
//!
//! Sequential reader for ustar archives.
//!
//! [`TarArchive`] wraps a seekable stream and scans it header by header,
//! skipping content with relative seeks, so listing an archive costs one
//! block read per entry regardless of how large the files inside are.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tarscan_archive::TarArchive;
//!
//! let archive = TarArchive::open("backup.tar").unwrap();
//! for entry in archive.entries().unwrap() {
//!     println!("{} ({} bytes at {})", entry.path(), entry.size(), entry.header_offset());
//! }
//! archive.close();
//! ```
//!
//! ## Entry lifetime
//!
//! Entries link back to their archive without owning it. Closing or dropping
//! the archive is always allowed; content reads on surviving entries then
//! fail with [`TarError::Closed`](tarscan_core::TarError::Closed).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod tar;

// Re-exports
pub use tar::{TarArchive, TarEntry, TarHeader};
pub use tarscan_core::{EntryKind, Result, TarError};
