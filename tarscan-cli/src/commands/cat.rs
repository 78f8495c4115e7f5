//! Cat command implementation.

use std::io::{self, Write};
use std::path::Path;
use tarscan_archive::TarArchive;

pub fn cmd_cat(archive: &Path, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tar = TarArchive::open(archive)?;
    let mut entry = tar
        .entries()?
        .into_iter()
        .find(|e| e.path() == path)
        .ok_or_else(|| format!("Entry not found: {}", path))?;

    if !entry.is_file() {
        return Err(format!("{} is a {}, not a regular file", path, entry.kind()).into());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let copied = io::copy(&mut entry, &mut out)?;
    out.flush()?;

    tracing::debug!(path, copied, "wrote entry content");
    Ok(())
}
