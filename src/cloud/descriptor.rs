use serde::{Deserialize, Serialize};

/// The parts of a vApp template's OVF envelope the adapter reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    #[serde(default)]
    virtual_system: Option<VirtualSystem>,
}

impl TemplateDescriptor {
    pub fn new(virtual_system: Option<VirtualSystem>) -> Self {
        Self { virtual_system }
    }

    pub fn virtual_system(&self) -> Option<&VirtualSystem> {
        self.virtual_system.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSystem {
    #[serde(default)]
    operating_system_section: Option<OperatingSystemSection>,
}

impl VirtualSystem {
    pub fn new(operating_system_section: Option<OperatingSystemSection>) -> Self {
        Self {
            operating_system_section,
        }
    }

    pub fn operating_system_section(&self) -> Option<&OperatingSystemSection> {
        self.operating_system_section.as_ref()
    }
}

/// Guest OS information as the vendor reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystemSection {
    // vendor token, eg. centos64Guest
    #[serde(default)]
    os_type: Option<String>,
    // eg. "CentOS 4/5/6 (64-bit)"
    #[serde(default)]
    description: Option<String>,
}

impl OperatingSystemSection {
    pub fn new(os_type: Option<String>, description: Option<String>) -> Self {
        Self {
            os_type,
            description,
        }
    }

    pub fn os_type(&self) -> Option<&str> {
        self.os_type.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
