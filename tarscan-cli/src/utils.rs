//! Utility functions for the CLI.

use glob::Pattern;
use tarscan_archive::TarEntry;

/// Check if a name matches the filter patterns.
/// - If include patterns are specified, the name must match at least one
/// - If exclude patterns are specified, the name must not match any
pub fn matches_filters(name: &str, include: &[String], exclude: &[String]) -> bool {
    // Check exclude patterns first
    let excluded = exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .any(|pattern| pattern.matches(name));
    if excluded {
        return false;
    }

    // If no include patterns, include everything (that wasn't excluded)
    if include.is_empty() {
        return true;
    }

    include
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .any(|pattern| pattern.matches(name))
}

/// Filter entries based on include/exclude patterns.
pub fn filter_entries<R>(
    entries: Vec<TarEntry<R>>,
    include: &[String],
    exclude: &[String],
) -> Vec<TarEntry<R>> {
    if include.is_empty() && exclude.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|e| matches_filters(e.path(), include, exclude))
        .collect()
}

/// Print entries, one per line.
pub fn print_entries<R>(entries: &[TarEntry<R>], long: bool) {
    if long {
        println!("{:<5} {:>10} {:>10} Name", "Mode", "Size", "Offset");
        println!("{}", "-".repeat(60));

        for entry in entries {
            println!("{}", entry);
        }

        println!("{}", "-".repeat(60));
        let total_size: u64 = entries.iter().map(|e| e.size()).sum();
        println!("{:>16} {} entries", total_size, entries.len());
    } else {
        for entry in entries {
            println!("{}", entry.path());
        }
    }
}
