use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system families the provider adapter knows how to recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Centos,
    Ubuntu,
    Windows,
    Suse,
    Unrecognized,
}

impl OsFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Centos => "centos",
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Windows => "windows",
            OsFamily::Suse => "suse",
            OsFamily::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-agnostic description of the guest operating system of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingSystem {
    family: OsFamily,
    version: Option<String>,
    is_64_bit: bool,
    description: Option<String>,
}

impl OperatingSystem {
    pub fn new(
        family: OsFamily,
        version: Option<String>,
        is_64_bit: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            family,
            version,
            is_64_bit,
            description,
        }
    }

    /// An operating system nothing could be derived for, keeping whatever
    /// description came with it.
    pub fn unrecognized(description: Option<String>) -> Self {
        Self::new(OsFamily::Unrecognized, None, false, description)
    }

    pub fn family(&self) -> OsFamily {
        self.family
    }

    /// Version as derived from the os type token or description
    /// eg. 4/5/6
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn is_64_bit(&self) -> bool {
        self.is_64_bit
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
