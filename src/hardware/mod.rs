mod supplier;

pub use supplier::{HardwareConfigSupplier, cached_catalog};

use tracing::debug;

use crate::cloud::{HardwareCatalog, HardwareProfile};

const MB_PER_GB: u32 = 1024;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HardwareError {
    #[error(
        "invalid hardware configuration (maxCpu={max_cpu}, minRam={min_ram}, maxRam={max_ram}): {reason}"
    )]
    InvalidConfiguration {
        max_cpu: u32,
        min_ram: u32,
        max_ram: u32,
        reason: &'static str,
    },
}

/// Check the catalog bounds; an out-of-range triple would otherwise publish
/// an empty catalog.
pub fn validate_bounds(max_cpu: u32, min_ram: u32, max_ram: u32) -> Result<(), HardwareError> {
    let reason = if max_cpu < 1 {
        "maxCpu must be at least 1"
    } else if min_ram < 1 {
        "minRam must be at least 1"
    } else if min_ram > max_ram {
        "minRam must not exceed maxRam"
    } else {
        return Ok(());
    };

    Err(HardwareError::InvalidConfiguration {
        max_cpu,
        min_ram,
        max_ram,
        reason,
    })
}

/// Canonical profile label, eg. `2CPU_2GB_RAM` or `1CPU_0.5GB_RAM`.
///
/// Fractional sizes use Rust's shortest round-trip `f64` formatting.
pub fn profile_name(cpu: u32, ram_mb: u32) -> String {
    if ram_mb % MB_PER_GB == 0 {
        format!("{cpu}CPU_{}GB_RAM", ram_mb / MB_PER_GB)
    } else {
        let ram_gb = f64::from(ram_mb) / f64::from(MB_PER_GB);
        format!("{cpu}CPU_{ram_gb}GB_RAM")
    }
}

pub fn create_hardware_profile(cpu: u32, ram_mb: u32) -> HardwareProfile {
    HardwareProfile::new(cpu, ram_mb, profile_name(cpu, ram_mb))
}

/// Powers of two times `start`, up to and including `max`.
fn doubling(start: u32, max: u32) -> impl Iterator<Item = u32> {
    std::iter::successors(Some(start), |n| n.checked_mul(2)).take_while(move |n| *n <= max)
}

/// Enumerate every (cpu, ram) pair of the doubling grid bounded by
/// `max_cpu`, `min_ram` and `max_ram`.
pub fn generate_catalog(
    max_cpu: u32,
    min_ram: u32,
    max_ram: u32,
) -> Result<HardwareCatalog, HardwareError> {
    validate_bounds(max_cpu, min_ram, max_ram)?;

    let catalog: HardwareCatalog = doubling(1, max_cpu)
        .flat_map(|cpu| doubling(min_ram, max_ram).map(move |ram| create_hardware_profile(cpu, ram)))
        .collect();

    debug!(
        max_cpu,
        min_ram,
        max_ram,
        profiles = catalog.len(),
        "generated hardware catalog"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::{HardwareError, create_hardware_profile, generate_catalog, profile_name};

    #[test]
    fn single_half_gig_profile() {
        let catalog = generate_catalog(1, 512, 512).unwrap();
        assert_eq!(catalog.len(), 1);

        let p = catalog.iter().next().unwrap();
        assert_eq!(p.cpu_count(), 1);
        assert_eq!(p.ram_mb(), 512);
        assert_eq!(p.name(), "1CPU_0.5GB_RAM");
        assert_eq!(p.id(), "1CPU_0.5GB_RAM");
        assert_eq!(p.hypervisor(), "esxi");
    }

    #[test]
    fn three_by_three_grid() {
        let catalog = generate_catalog(4, 1024, 4096).unwrap();
        assert_eq!(catalog.len(), 9);

        for p in &catalog {
            assert!([1, 2, 4].contains(&p.cpu_count()));
            assert!([1024, 2048, 4096].contains(&p.ram_mb()));
        }
        assert!(catalog.contains(&create_hardware_profile(2, 2048)));
        assert_eq!(catalog.by_id("2CPU_2GB_RAM").unwrap().ram_mb(), 2048);
    }

    #[test]
    fn bounds_need_not_be_powers_of_two() {
        let catalog = generate_catalog(6, 768, 4000).unwrap();
        let names: Vec<&str> = catalog.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "1CPU_0.75GB_RAM",
                "1CPU_1.5GB_RAM",
                "1CPU_3GB_RAM",
                "2CPU_0.75GB_RAM",
                "2CPU_1.5GB_RAM",
                "2CPU_3GB_RAM",
                "4CPU_0.75GB_RAM",
                "4CPU_1.5GB_RAM",
                "4CPU_3GB_RAM",
            ]
        );
    }

    #[test]
    fn generation_is_idempotent() {
        assert_eq!(
            generate_catalog(8, 512, 8192).unwrap(),
            generate_catalog(8, 512, 8192).unwrap()
        );
    }

    #[test]
    fn huge_bounds_terminate() {
        let catalog = generate_catalog(u32::MAX, u32::MAX, u32::MAX).unwrap();
        assert_eq!(catalog.len(), 32);
    }

    #[test]
    fn rejects_zero_cpu() {
        let err = generate_catalog(0, 512, 1024).unwrap_err();
        assert!(matches!(
            err,
            HardwareError::InvalidConfiguration { max_cpu: 0, .. }
        ));
    }

    #[test]
    fn rejects_inverted_ram_range() {
        let err = generate_catalog(4, 2048, 1024).unwrap_err();
        assert!(matches!(
            err,
            HardwareError::InvalidConfiguration {
                reason: "minRam must not exceed maxRam",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_ram() {
        assert!(generate_catalog(1, 0, 1024).is_err());
    }

    #[test]
    fn names() {
        assert_eq!(profile_name(2, 2048), "2CPU_2GB_RAM");
        assert_eq!(profile_name(1, 1536), "1CPU_1.5GB_RAM");
        assert_eq!(profile_name(16, 65536), "16CPU_64GB_RAM");
        assert_eq!(profile_name(1, 100), "1CPU_0.09765625GB_RAM");
    }
}
