//! Rendered spec output.
//!
//! File writes go through a temp file in the destination directory and are
//! persisted in one rename, so a reader never sees a partial spec.
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `text` to `dest`, or to stdout when no destination is given.
///
/// Both targets receive the same bytes; no trailing newline is added.
pub fn write_spec(dest: Option<&Path>, text: &str) -> Result<()> {
    let Some(dest) = dest else {
        print!("{text}");
        return Ok(());
    };
    let parent = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    let mut staged = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("stage spec in {}", parent.display()))?;
    staged.write_all(text.as_bytes()).context("write staged spec")?;
    staged
        .persist(dest)
        .with_context(|| format!("write {}", dest.display()))?;
    tracing::info!(path = %dest.display(), bytes = text.len(), "wrote spec file");
    Ok(())
}
