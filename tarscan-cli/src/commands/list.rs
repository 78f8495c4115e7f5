//! List command implementation.

use crate::utils::{filter_entries, print_entries};
use serde::Serialize;
use std::path::Path;
use tarscan_archive::{EntryKind, TarArchive, TarEntry};

/// JSON serializable entry data for archive listings.
#[derive(Debug, Serialize)]
struct EntryJson<'a> {
    path: &'a str,
    kind: &'a EntryKind,
    mode: String,
    size: u64,
    header_offset: u64,
}

impl<'a> EntryJson<'a> {
    fn from_entry<R>(entry: &'a TarEntry<R>) -> Self {
        Self {
            path: entry.path(),
            kind: entry.kind(),
            mode: format!("{:04o}", entry.mode()),
            size: entry.size(),
            header_offset: entry.header_offset(),
        }
    }
}

/// JSON output for archive listing.
#[derive(Debug, Serialize)]
struct ArchiveListJson<'a> {
    archive: &'a str,
    entries: Vec<EntryJson<'a>>,
}

/// Options for listing archive contents.
pub struct ListOptions<'a> {
    pub long: bool,
    pub json: bool,
    pub include: &'a [String],
    pub exclude: &'a [String],
}

pub fn cmd_list(archive: &Path, options: &ListOptions) -> Result<(), Box<dyn std::error::Error>> {
    let tar = TarArchive::open(archive)?;
    let entries = filter_entries(tar.entries()?, options.include, options.exclude);

    if options.json {
        let output = ArchiveListJson {
            archive: tar.identifier(),
            entries: entries.iter().map(EntryJson::from_entry).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_entries(&entries, options.long);
    }

    tar.close();
    Ok(())
}
