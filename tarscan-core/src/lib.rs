//! # tarscan Core
//!
//! Core components for the tarscan ustar reader.
//!
//! This crate provides the block-level building blocks the scanner is made of:
//!
//! - [`block`]: Block size, header field layout, end-of-archive detection, padding
//! - [`octal`]: Tolerant ASCII-octal field parsing
//! - [`checksum`]: Header checksum with the all-spaces placeholder convention
//! - [`entry`]: Entry kinds decoded from the type flag
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     tarscan list / test / info / cat                    │
//! ├─────────────────────────────────────────────────────────┤
//! │ Archive (tarscan-archive)                               │
//! │     TarArchive handle, scanner, header decoder          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Blocks (this crate)                                     │
//! │     octal fields, checksum, zero-block sentinel         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tarscan_core::block::{BLOCK_SIZE, is_end_of_archive, padded_size};
//! use tarscan_core::octal::parse_octal;
//!
//! assert_eq!(parse_octal(b"  755\0\0\0"), 0o755);
//! assert!(is_end_of_archive(&[0u8; BLOCK_SIZE]));
//! assert_eq!(padded_size(513), 1024);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod block;
pub mod checksum;
pub mod entry;
pub mod error;
pub mod octal;

// Re-exports for convenience
pub use block::{BLOCK_SIZE, Block, is_end_of_archive, padded_size};
pub use entry::EntryKind;
pub use error::{Result, TarError};
pub use octal::parse_octal;
