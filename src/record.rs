//! Package record consumed by the spec renderer.
//!
//! The record is built by a caller (usually `load::parse_record`) and is only
//! ever borrowed while rendering.
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Scalar tag value; JSON strings and numbers are both accepted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TagValue {
    Text(String),
    Number(serde_json::Number),
}

impl TagValue {
    /// Whether an optional tag produces a header line.
    ///
    /// Text must be non-empty; numbers always count, zero included.
    pub fn is_present(value: Option<&TagValue>) -> bool {
        match value {
            Some(TagValue::Text(text)) => !text.is_empty(),
            Some(TagValue::Number(_)) => true,
            None => false,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(text) => f.write_str(text),
            TagValue::Number(number) => fmt_number(number, f),
        }
    }
}

/// Integral floats print without a fraction (`1e3` is `1000`, `1.0` is `1`).
fn fmt_number(number: &serde_json::Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_f64() {
        if let Some(value) = number.as_f64() {
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
                return write!(f, "{}", value as i64);
            }
        }
    }
    write!(f, "{number}")
}

/// An explicit JSON `null` list reads the same as an absent one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

impl From<u64> for TagValue {
    fn from(value: u64) -> Self {
        TagValue::Number(value.into())
    }
}

/// Header tags of a package.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tags {
    pub name: TagValue,
    pub version: TagValue,
    pub release: TagValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packager: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_root: Option<TagValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TagValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requires: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conflicts: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exclude_archs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exclusive_archs: Vec<String>,
    #[serde(default, rename = "excludeOS", deserialize_with = "null_as_empty")]
    pub exclude_os: Vec<String>,
    #[serde(default, rename = "exclusiveOS", deserialize_with = "null_as_empty")]
    pub exclusive_os: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub no_sources: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub patches: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub no_patches: Vec<String>,
    /// `Some(false)` disables automatic requires; absent and `true` are equivalent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_req: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_prov: Option<bool>,
}

impl Tags {
    pub fn new(
        name: impl Into<TagValue>,
        version: impl Into<TagValue>,
        release: impl Into<TagValue>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            release: release.into(),
            summary: None,
            license: None,
            epoch: None,
            distribution: None,
            icon: None,
            vendor: None,
            url: None,
            group: None,
            packager: None,
            prefix: None,
            build_root: None,
            description: None,
            requires: Vec::new(),
            conflicts: Vec::new(),
            exclude_archs: Vec::new(),
            exclusive_archs: Vec::new(),
            exclude_os: Vec::new(),
            exclusive_os: Vec::new(),
            sources: Vec::new(),
            no_sources: Vec::new(),
            patches: Vec::new(),
            no_patches: Vec::new(),
            auto_req: None,
            auto_prov: None,
        }
    }
}

/// Build-phase script bodies, one literal line per entry.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Scripts {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prep: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub build: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub install: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub check: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub clean: Vec<String>,
}

/// Fully populated package description handed to the renderer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PackageRecord {
    pub tags: Tags,
    #[serde(default)]
    pub scripts: Scripts,
}

impl PackageRecord {
    /// Record with only the required tags set.
    pub fn new(
        name: impl Into<TagValue>,
        version: impl Into<TagValue>,
        release: impl Into<TagValue>,
    ) -> Self {
        Self {
            tags: Tags::new(name, version, release),
            scripts: Scripts::default(),
        }
    }
}
