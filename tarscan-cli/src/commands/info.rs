//! Info command implementation.

use std::collections::BTreeMap;
use std::path::Path;
use tarscan_archive::{EntryKind, TarArchive, TarEntry};
use tarscan_core::BLOCK_SIZE;

/// Aggregate figures for an archive listing.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    by_kind: BTreeMap<&'static str, usize>,
    total_size: u64,
    span: u64,
}

impl Summary {
    fn from_entries<R>(entries: &[TarEntry<R>]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            let label = match entry.kind() {
                EntryKind::Regular => "Files",
                EntryKind::Directory => "Directories",
                EntryKind::HardLink(_) | EntryKind::SymbolicLink(_) => "Links",
                _ => "Other",
            };
            *summary.by_kind.entry(label).or_default() += 1;
            summary.total_size += entry.size();
            summary.span = entry.data_offset() + entry.padded_size();
        }
        summary
    }
}

pub fn cmd_info(archive: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let tar = TarArchive::open(archive)?;
    let metadata = std::fs::metadata(archive)?;
    let entries = tar.entries()?;
    let summary = Summary::from_entries(&entries);

    println!("Archive Information");
    println!("===================");
    println!("File: {}", tar.identifier());
    println!("Size: {} bytes", metadata.len());
    println!("Block size: {} bytes", BLOCK_SIZE);

    println!();
    println!("Contents:");
    println!("  Entries: {}", entries.len());
    for (label, count) in &summary.by_kind {
        println!("  {}: {}", label, count);
    }
    println!("  Total size: {} bytes", summary.total_size);
    println!("  Entry span: {} bytes", summary.span);

    Ok(())
}
