//! Deterministic RPM spec renderer for package records.
//!
//! Rendering is a pure walk over the record in a fixed field order; the output
//! order is part of the contract and downstream tooling may rely on it.

use crate::record::PackageRecord;
use anyhow::Result;
use serde::Serialize;

mod buffer;
mod format;
mod model;

pub use buffer::LineBuffer;
pub use model::{AutoDependencies, ScriptSection};

use format::{append_description, append_indexed, append_list, append_script_section, append_tag};
use model::{dependency_lists, descriptive_tags, layout_tags, platform_lists};

/// Shape of a rendered spec, used for `check` output and diagnostics.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub header_lines: usize,
    pub description: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
    pub total_lines: usize,
}

/// Rendered spec text plus its summary.
#[derive(Debug, Clone)]
pub struct RenderedSpec {
    pub text: String,
    pub summary: RenderSummary,
}

/// Render a spec file and report its shape.
pub fn render_spec_summary(record: &PackageRecord) -> RenderedSpec {
    let tags = &record.tags;
    let mut buffer = LineBuffer::new();

    buffer
        .append(format!("Name: {}", tags.name))
        .append(format!("Version: {}", tags.version))
        .append(format!("Release: {}", tags.release));

    for (label, value) in descriptive_tags(tags) {
        append_tag(&mut buffer, label, value);
    }
    for (label, values) in dependency_lists(tags) {
        append_list(&mut buffer, label, values);
    }
    let auto_deps = AutoDependencies::from_flags(tags.auto_req, tags.auto_prov);
    if let Some(line) = auto_deps.header_line() {
        buffer.append(line);
    }
    for (label, values) in platform_lists(tags) {
        append_list(&mut buffer, label, values);
    }
    for (label, value) in layout_tags(tags) {
        append_tag(&mut buffer, label, value);
    }
    append_indexed(&mut buffer, "Source", &tags.sources);
    append_list(&mut buffer, "NoSource", &tags.no_sources);
    append_indexed(&mut buffer, "Patch", &tags.patches);
    append_list(&mut buffer, "NoPatch", &tags.no_patches);
    let header_lines = buffer.len();

    let description = append_description(&mut buffer, tags.description.as_ref());

    let mut sections = Vec::new();
    for section in ScriptSection::ALL {
        if append_script_section(&mut buffer, section, section.lines(&record.scripts)) {
            sections.push(section.name().to_string());
        }
    }

    let summary = RenderSummary {
        header_lines,
        description,
        sections,
        total_lines: buffer.len(),
    };
    tracing::trace!(
        header_lines = summary.header_lines,
        description = summary.description,
        sections = summary.sections.len(),
        total_lines = summary.total_lines,
        "rendered spec"
    );

    RenderedSpec {
        text: buffer.render(),
        summary,
    }
}

/// Render a spec file to text.
pub fn render_spec(record: &PackageRecord) -> String {
    render_spec_summary(record).text
}

/// Render a spec file and hand the result to `on_done`.
///
/// The handler runs exactly once before this returns and always receives `Ok`.
pub fn render_spec_with<F, R>(record: &PackageRecord, on_done: F) -> R
where
    F: FnOnce(Result<String>) -> R,
{
    on_done(Ok(render_spec(record)))
}
