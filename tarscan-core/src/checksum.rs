//! Header checksum.
//!
//! The stored checksum is the sum of all 512 header bytes taken as unsigned
//! values, with the 8-byte checksum field itself counted as ASCII spaces.

use crate::block::{Block, field};
use crate::octal::parse_octal;

/// Checksum field contents while the sum is being computed.
const PLACEHOLDER: u8 = b' ';

/// Recompute the checksum of a header block.
pub fn compute(block: &Block) -> u64 {
    block
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if field::CHECKSUM.contains(&i) {
                u64::from(PLACEHOLDER)
            } else {
                u64::from(b)
            }
        })
        .sum()
}

/// Checksum value stored in the header's checksum field.
pub fn stored(block: &Block) -> u64 {
    parse_octal(&block[field::CHECKSUM])
}

/// Returns true if the stored checksum matches the recomputed one.
pub fn verify(block: &Block) -> bool {
    stored(block) == compute(block)
}

/// Write a valid checksum into `block`, in the `"%06o\0 "` form tar writers use.
pub fn write(block: &mut Block) {
    let sum = compute(block);
    let encoded = format!("{:06o}\0 ", sum);
    block[field::CHECKSUM].copy_from_slice(&encoded.as_bytes()[..field::CHECKSUM.len()]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BLOCK_SIZE;

    fn sample_header() -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        block[..5].copy_from_slice(b"a.txt");
        block[100..107].copy_from_slice(b"0000644");
        block[124..135].copy_from_slice(b"00000000005");
        block[156] = b'0';
        block[257..263].copy_from_slice(b"ustar\0");
        write(&mut block);
        block
    }

    #[test]
    fn test_zero_block_sum() {
        // Only the placeholder contributes.
        assert_eq!(compute(&[0u8; BLOCK_SIZE]), 8 * 0x20);
    }

    #[test]
    fn test_field_content_is_ignored() {
        let mut a = [0u8; BLOCK_SIZE];
        let mut b = [0u8; BLOCK_SIZE];
        a[148..156].copy_from_slice(b"\0\0\0\0\0\0\0\0");
        b[148..156].copy_from_slice(b"77777777");
        assert_eq!(compute(&a), compute(&b));
    }

    #[test]
    fn test_high_bytes_are_unsigned() {
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0xFF;
        assert_eq!(compute(&block), 0xFF + 8 * 0x20);
    }

    #[test]
    fn test_valid_header_verifies() {
        let block = sample_header();
        assert!(verify(&block));
        assert_eq!(stored(&block), compute(&block));
    }

    #[test]
    fn test_single_byte_flip_fails() {
        let block = sample_header();
        for pos in (0..BLOCK_SIZE).filter(|p| !field::CHECKSUM.contains(p)) {
            let mut corrupt = block;
            corrupt[pos] ^= 0x01;
            assert!(!verify(&corrupt), "flip at {pos} went undetected");
        }
    }
}
