use crate::record::{Scripts, TagValue, Tags};

/// Outcome of the `autoReq`/`autoProv` pair; only an explicit `false` counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDependencies {
    NoAutoReqProv,
    NoAutoReq,
    NoAutoProv,
    Default,
}

impl AutoDependencies {
    pub fn from_flags(auto_req: Option<bool>, auto_prov: Option<bool>) -> Self {
        match (auto_req, auto_prov) {
            (Some(false), Some(false)) => AutoDependencies::NoAutoReqProv,
            (Some(false), _) => AutoDependencies::NoAutoReq,
            (_, Some(false)) => AutoDependencies::NoAutoProv,
            _ => AutoDependencies::Default,
        }
    }

    pub fn header_line(self) -> Option<&'static str> {
        match self {
            AutoDependencies::NoAutoReqProv => Some("AutoReqProv: no"),
            AutoDependencies::NoAutoReq => Some("AutoReq: no"),
            AutoDependencies::NoAutoProv => Some("AutoProv: no"),
            AutoDependencies::Default => None,
        }
    }
}

/// Script sections in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSection {
    Prep,
    Build,
    Install,
    Check,
    Clean,
}

impl ScriptSection {
    pub const ALL: [ScriptSection; 5] = [
        ScriptSection::Prep,
        ScriptSection::Build,
        ScriptSection::Install,
        ScriptSection::Check,
        ScriptSection::Clean,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScriptSection::Prep => "prep",
            ScriptSection::Build => "build",
            ScriptSection::Install => "install",
            ScriptSection::Check => "check",
            ScriptSection::Clean => "clean",
        }
    }

    pub fn marker(self) -> String {
        format!("%{}", self.name())
    }

    pub fn lines(self, scripts: &Scripts) -> &[String] {
        match self {
            ScriptSection::Prep => &scripts.prep,
            ScriptSection::Build => &scripts.build,
            ScriptSection::Install => &scripts.install,
            ScriptSection::Check => &scripts.check,
            ScriptSection::Clean => &scripts.clean,
        }
    }
}

/// Optional scalars emitted right after the required tags.
pub(super) fn descriptive_tags(tags: &Tags) -> [(&'static str, Option<&TagValue>); 9] {
    [
        ("Summary", tags.summary.as_ref()),
        ("License", tags.license.as_ref()),
        ("Epoch", tags.epoch.as_ref()),
        ("Distribution", tags.distribution.as_ref()),
        ("Icon", tags.icon.as_ref()),
        ("Vendor", tags.vendor.as_ref()),
        ("URL", tags.url.as_ref()),
        ("Group", tags.group.as_ref()),
        ("Packager", tags.packager.as_ref()),
    ]
}

pub(super) fn dependency_lists(tags: &Tags) -> [(&'static str, &[String]); 2] {
    [
        ("Requires", tags.requires.as_slice()),
        ("Conflicts", tags.conflicts.as_slice()),
    ]
}

pub(super) fn platform_lists(tags: &Tags) -> [(&'static str, &[String]); 4] {
    [
        ("ExcludeArch", tags.exclude_archs.as_slice()),
        ("ExclusiveArch", tags.exclusive_archs.as_slice()),
        ("ExcludeOS", tags.exclude_os.as_slice()),
        ("ExclusiveOS", tags.exclusive_os.as_slice()),
    ]
}

pub(super) fn layout_tags(tags: &Tags) -> [(&'static str, Option<&TagValue>); 2] {
    [
        ("Prefix", tags.prefix.as_ref()),
        ("BuildRoot", tags.build_root.as_ref()),
    ]
}
