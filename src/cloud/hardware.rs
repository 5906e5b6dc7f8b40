use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Hypervisor every synthetic profile is offered on.
pub const HYPERVISOR_ESXI: &str = "esxi";

/// Virtual processor layout of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Processor {
    cores: u32,
    speed: f64,
}

impl Processor {
    pub fn cores(&self) -> u32 {
        self.cores
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

/// A named (CPU count, RAM size) combination offered as a machine shape.
///
/// Ordering is by CPU count, then RAM, so catalogues iterate from the
/// smallest shape upwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HardwareProfile {
    cpu_count: u32,
    ram_mb: u32,
    id: String,
    name: String,
    hypervisor: &'static str,
}

impl HardwareProfile {
    pub fn new(cpu_count: u32, ram_mb: u32, name: String) -> Self {
        Self {
            cpu_count,
            ram_mb,
            id: name.clone(),
            name,
            hypervisor: HYPERVISOR_ESXI,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Canonical label
    /// eg. 2CPU_2GB_RAM
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cpu_count(&self) -> u32 {
        self.cpu_count
    }

    pub fn ram_mb(&self) -> u32 {
        self.ram_mb
    }

    pub fn hypervisor(&self) -> &str {
        self.hypervisor
    }

    /// One single-speed core per virtual CPU.
    pub fn processor(&self) -> Processor {
        Processor {
            cores: self.cpu_count,
            speed: 1.0,
        }
    }
}

impl fmt::Display for HardwareProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} vCPU | {} MB | {}",
            self.name, self.cpu_count, self.ram_mb, self.hypervisor
        )
    }
}

/// Immutable set of hardware profiles produced for one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HardwareCatalog {
    profiles: BTreeSet<HardwareProfile>,
}

impl HardwareCatalog {
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HardwareProfile> {
        self.profiles.iter()
    }

    pub fn contains(&self, profile: &HardwareProfile) -> bool {
        self.profiles.contains(profile)
    }

    pub fn by_id(&self, id: &str) -> Option<&HardwareProfile> {
        self.profiles.iter().find(|p| p.id() == id)
    }
}

impl FromIterator<HardwareProfile> for HardwareCatalog {
    fn from_iter<I: IntoIterator<Item = HardwareProfile>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HardwareCatalog {
    type Item = &'a HardwareProfile;
    type IntoIter = std::collections::btree_set::Iter<'a, HardwareProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{HYPERVISOR_ESXI, HardwareCatalog, HardwareProfile};

    fn profile(cpu: u32, ram: u32) -> HardwareProfile {
        HardwareProfile::new(cpu, ram, format!("{cpu}CPU_{ram}MB"))
    }

    #[test]
    fn id_and_name_match() {
        let p = profile(2, 2048);
        assert_eq!(p.id(), p.name());
        assert_eq!(p.hypervisor(), HYPERVISOR_ESXI);
    }

    #[test]
    fn processor_has_one_core_per_cpu() {
        let cpu = profile(4, 1024).processor();
        assert_eq!(cpu.cores(), 4);
        assert_eq!(cpu.speed(), 1.0);
    }

    #[test]
    fn catalog_deduplicates_and_orders() {
        let catalog: HardwareCatalog = vec![profile(2, 512), profile(1, 1024), profile(2, 512)]
            .into_iter()
            .collect();

        assert_eq!(catalog.len(), 2);
        let cpus: Vec<u32> = catalog.iter().map(|p| p.cpu_count()).collect();
        assert_eq!(cpus, vec![1, 2]);
        assert!(catalog.by_id("2CPU_512MB").is_some());
        assert!(catalog.by_id("8CPU_512MB").is_none());
    }
}
