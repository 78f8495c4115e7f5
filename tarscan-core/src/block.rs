//! Block-level layout of a ustar stream.
//!
//! A tar stream is a sequence of 512-byte blocks. Each entry is one header
//! block followed by its content, padded with zeros up to the next block
//! boundary. An all-zero block ends the entry list.

use std::ops::Range;

/// TAR block size.
pub const BLOCK_SIZE: usize = 512;

/// [`BLOCK_SIZE`] as a 64-bit offset quantity.
pub const BLOCK_SIZE_U64: u64 = BLOCK_SIZE as u64;

/// One raw 512-byte block.
pub type Block = [u8; BLOCK_SIZE];

/// Byte ranges of the ustar header fields this crate consumes.
pub mod field {
    use super::Range;

    /// Entry name, NUL-padded.
    pub const NAME: Range<usize> = 0..100;
    /// Permission bits, octal.
    pub const MODE: Range<usize> = 100..108;
    /// Declared content size, octal.
    pub const SIZE: Range<usize> = 124..136;
    /// Header checksum, octal.
    pub const CHECKSUM: Range<usize> = 148..156;
    /// Single-byte entry type flag.
    pub const TYPEFLAG: usize = 156;
    /// Link target, NUL-padded.
    pub const LINKNAME: Range<usize> = 157..257;
}

/// Returns true if every byte of the block is zero.
///
/// The scanner stops on the first such block; a conventional second zero
/// block is never read.
pub fn is_end_of_archive(block: &Block) -> bool {
    block.iter().all(|&b| b == 0)
}

/// Number of archive bytes occupied by `size` bytes of content, including
/// the zero padding up to the next block boundary.
pub fn padded_size(size: u64) -> u64 {
    if size % BLOCK_SIZE_U64 == 0 {
        size
    } else {
        (size / BLOCK_SIZE_U64 + 1) * BLOCK_SIZE_U64
    }
}

/// Read a NUL-terminated string from a fixed-width field.
///
/// Stops at the first NUL or at the field end, whichever comes first. Invalid
/// UTF-8 is replaced rather than rejected.
pub fn parse_string(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).into_owned()
}
