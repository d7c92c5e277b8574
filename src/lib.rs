//! RPM spec file writer.
//!
//! Turns a [`PackageRecord`] into spec text: header tags in a fixed order,
//! then `%description` and the build-phase script sections, separated by
//! single blank lines.
pub mod load;
pub mod output;
pub mod record;
pub mod render;

pub use load::{load_record, parse_record};
pub use record::{PackageRecord, Scripts, TagValue, Tags};
pub use render::{
    render_spec, render_spec_summary, render_spec_with, LineBuffer, RenderSummary, RenderedSpec,
};
