use serde::{Deserialize, Serialize};

use crate::hardware::{HardwareError, validate_bounds};

pub const DEFAULT_MAX_CPU: u32 = 8;
pub const DEFAULT_MIN_RAM: u32 = 512;
pub const DEFAULT_MAX_RAM: u32 = 8192;

/// Bounds of the synthetic hardware catalog. RAM values are in MB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareBounds {
    #[serde(default = "default_max_cpu")]
    max_cpu: u32,
    #[serde(default = "default_min_ram")]
    min_ram: u32,
    #[serde(default = "default_max_ram")]
    max_ram: u32,
}

fn default_max_cpu() -> u32 {
    DEFAULT_MAX_CPU
}

fn default_min_ram() -> u32 {
    DEFAULT_MIN_RAM
}

fn default_max_ram() -> u32 {
    DEFAULT_MAX_RAM
}

impl Default for HardwareBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CPU, DEFAULT_MIN_RAM, DEFAULT_MAX_RAM)
    }
}

impl HardwareBounds {
    pub fn new(max_cpu: u32, min_ram: u32, max_ram: u32) -> Self {
        Self {
            max_cpu,
            min_ram,
            max_ram,
        }
    }

    pub fn max_cpu(&self) -> u32 {
        self.max_cpu
    }

    pub fn min_ram(&self) -> u32 {
        self.min_ram
    }

    pub fn max_ram(&self) -> u32 {
        self.max_ram
    }

    pub fn validate(&self) -> Result<(), HardwareError> {
        validate_bounds(self.max_cpu, self.min_ram, self.max_ram)
    }
}

/// Provider properties file; serde is confined to this module tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProperties {
    #[serde(default)]
    pub(crate) hardware: HardwareBounds,
}

impl ProviderProperties {
    pub fn hardware(&self) -> HardwareBounds {
        self.hardware
    }
}
