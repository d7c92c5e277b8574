//! Record construction boundary.
//!
//! Malformed input is rejected here so the renderer can stay total.
use crate::record::{PackageRecord, TagValue};
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path value that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Decode a package record from JSON text.
pub fn parse_record(text: &str) -> Result<PackageRecord> {
    let record: PackageRecord =
        serde_json::from_str(text).context("parse package record JSON")?;
    check_required(&record)?;
    Ok(record)
}

/// Reject records whose required tags are empty strings.
pub fn check_required(record: &PackageRecord) -> Result<()> {
    let required = [
        ("name", &record.tags.name),
        ("version", &record.tags.version),
        ("release", &record.tags.release),
    ];
    for (field, value) in required {
        if !TagValue::is_present(Some(value)) {
            return Err(anyhow!("{field} must not be empty"));
        }
    }
    Ok(())
}

/// Load a record from `path`, or from stdin when `path` is `-`.
pub fn load_record(path: &Path) -> Result<PackageRecord> {
    let text = if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read package record from stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("read record {}", path.display()))?
    };
    let record = parse_record(&text).with_context(|| format!("load {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        name = %record.tags.name,
        version = %record.tags.version,
        "loaded package record"
    );
    Ok(record)
}
