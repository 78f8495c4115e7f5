//! ustar header decoding.

use tarscan_core::block::{Block, field, parse_string};
use tarscan_core::entry::EntryKind;
use tarscan_core::octal::parse_octal;

/// Fields decoded from one header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarHeader {
    /// Entry name, bounded to the 100-byte name field.
    pub name: String,
    /// Entry kind; link kinds carry their target.
    pub kind: EntryKind,
    /// Permission bits.
    pub mode: u32,
    /// Declared content size in bytes.
    pub size: u64,
}

impl TarHeader {
    /// Decode a header block.
    ///
    /// The block must already have passed the end-of-archive and checksum
    /// checks; decoding itself never fails.
    pub fn decode(block: &Block) -> Self {
        let name = parse_string(&block[field::NAME]);
        let kind = EntryKind::from_flag(block[field::TYPEFLAG], || {
            parse_string(&block[field::LINKNAME])
        });
        // An 8-byte field holds at most 8 octal digits, well inside u32.
        let mode = parse_octal(&block[field::MODE]) as u32;
        let size = parse_octal(&block[field::SIZE]);

        Self {
            name,
            kind,
            mode,
            size,
        }
    }
}
