//! In-memory ustar fixtures shared by the integration tests and benches.

#![allow(dead_code)]

use tarscan_core::block::{BLOCK_SIZE, Block, padded_size};
use tarscan_core::checksum;

/// Builds ustar byte streams block by block.
#[derive(Default)]
pub struct TarBuilder {
    data: Vec<u8>,
}

impl TarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A checksummed header block.
    pub fn header(name: &str, size: u64, typeflag: u8, linkname: &str, mode: u32) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        block[..name.len()].copy_from_slice(name.as_bytes());
        block[100..107].copy_from_slice(format!("{:07o}", mode).as_bytes());
        block[108..115].copy_from_slice(b"0001750");
        block[116..123].copy_from_slice(b"0001750");
        block[124..135].copy_from_slice(format!("{:011o}", size).as_bytes());
        block[136..147].copy_from_slice(b"14723456700");
        block[156] = typeflag;
        block[157..157 + linkname.len()].copy_from_slice(linkname.as_bytes());
        block[257..263].copy_from_slice(b"ustar\0");
        block[263..265].copy_from_slice(b"00");
        checksum::write(&mut block);
        block
    }

    pub fn file(mut self, name: &str, content: &[u8]) -> Self {
        self.data.extend_from_slice(&Self::header(
            name,
            content.len() as u64,
            b'0',
            "",
            0o644,
        ));
        self.data.extend_from_slice(content);
        self.pad();
        self
    }

    pub fn directory(mut self, name: &str) -> Self {
        self.data
            .extend_from_slice(&Self::header(name, 0, b'5', "", 0o755));
        self
    }

    pub fn symlink(mut self, name: &str, target: &str) -> Self {
        self.data
            .extend_from_slice(&Self::header(name, 0, b'2', target, 0o777));
        self
    }

    pub fn hardlink(mut self, name: &str, target: &str) -> Self {
        self.data
            .extend_from_slice(&Self::header(name, 0, b'1', target, 0o644));
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Two zero blocks, as tar writers emit.
    pub fn finish(mut self) -> Vec<u8> {
        self.data.extend_from_slice(&[0u8; BLOCK_SIZE * 2]);
        self.data
    }

    /// A single zero block, the minimum the scanner needs.
    pub fn end(mut self) -> Vec<u8> {
        self.data.extend_from_slice(&[0u8; BLOCK_SIZE]);
        self.data
    }

    /// The stream so far, without a terminator.
    pub fn unterminated(self) -> Vec<u8> {
        self.data
    }

    fn pad(&mut self) {
        let len = self.data.len() as u64;
        let padded = padded_size(len) as usize;
        self.data.resize(padded, 0);
    }
}
