use serde::{Deserialize, Serialize};

/// Provider-specific options applied when a node is created from a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateOptions {
    #[serde(default)]
    guest_customization_script: Option<String>,
    // MB
    #[serde(default)]
    memory: Option<u32>,
    #[serde(default)]
    virtual_cpus: Option<u32>,
}

impl TemplateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guest_customization_script(mut self, script: impl Into<String>) -> Self {
        self.guest_customization_script = Some(script.into());
        self
    }

    pub fn with_memory(mut self, memory_mb: u32) -> Self {
        self.memory = Some(memory_mb);
        self
    }

    pub fn with_virtual_cpus(mut self, virtual_cpus: u32) -> Self {
        self.virtual_cpus = Some(virtual_cpus);
        self
    }

    pub fn guest_customization_script(&self) -> Option<&str> {
        self.guest_customization_script.as_deref()
    }

    pub fn memory(&self) -> Option<u32> {
        self.memory
    }

    pub fn virtual_cpus(&self) -> Option<u32> {
        self.virtual_cpus
    }

    /// Copy every option set here onto `to`, leaving its other values alone.
    pub fn copy_to(&self, to: &mut TemplateOptions) {
        if let Some(script) = &self.guest_customization_script {
            to.guest_customization_script = Some(script.clone());
        }
        if let Some(memory) = self.memory {
            to.memory = Some(memory);
        }
        if let Some(cpus) = self.virtual_cpus {
            to.virtual_cpus = Some(cpus);
        }
    }
}
