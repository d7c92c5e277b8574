use super::buffer::LineBuffer;
use super::model::ScriptSection;
use crate::record::TagValue;

pub(super) fn append_tag(buffer: &mut LineBuffer, label: &str, value: Option<&TagValue>) {
    if let Some(value) = value.filter(|value| TagValue::is_present(Some(*value))) {
        buffer.append(format!("{label}: {value}"));
    }
}

pub(super) fn append_list(buffer: &mut LineBuffer, label: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    buffer.append(format!("{label}: {}", values.join(", ")));
}

/// A single entry keeps the bare label; several are numbered from zero.
pub(super) fn append_indexed(buffer: &mut LineBuffer, label: &str, values: &[String]) {
    match values {
        [] => {}
        [only] => {
            buffer.append(format!("{label}: {only}"));
        }
        _ => {
            for (idx, value) in values.iter().enumerate() {
                buffer.append(format!("{label}{idx}: {value}"));
            }
        }
    }
}

pub(super) fn append_description(
    buffer: &mut LineBuffer,
    description: Option<&TagValue>,
) -> bool {
    buffer.request_blank();
    let Some(description) = description.filter(|value| TagValue::is_present(Some(*value))) else {
        return false;
    };
    buffer.append("%description").append(description.to_string());
    true
}

/// Returns whether the section produced output.
pub(super) fn append_script_section(
    buffer: &mut LineBuffer,
    section: ScriptSection,
    lines: &[String],
) -> bool {
    buffer.request_blank();
    if lines.is_empty() {
        return false;
    }
    buffer.append(section.marker());
    for line in lines {
        buffer.append(line.as_str());
    }
    true
}
