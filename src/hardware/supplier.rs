use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::info;

use super::{HardwareError, generate_catalog};
use crate::cloud::HardwareCatalog;
use crate::config::HardwareBounds;

/// Publishes the synthetic hardware catalog for one configuration. The
/// catalog is generated when the supplier is built and shared read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct HardwareConfigSupplier {
    bounds: HardwareBounds,
    catalog: Arc<HardwareCatalog>,
}

impl HardwareConfigSupplier {
    pub fn new(bounds: HardwareBounds) -> Result<Self, HardwareError> {
        let catalog = Arc::new(generate_catalog(
            bounds.max_cpu(),
            bounds.min_ram(),
            bounds.max_ram(),
        )?);

        info!(
            max_cpu = bounds.max_cpu(),
            min_ram = bounds.min_ram(),
            max_ram = bounds.max_ram(),
            profiles = catalog.len(),
            "hardware catalog published"
        );

        Ok(Self { bounds, catalog })
    }

    pub fn bounds(&self) -> HardwareBounds {
        self.bounds
    }

    pub fn get(&self) -> Arc<HardwareCatalog> {
        Arc::clone(&self.catalog)
    }
}

/// Process-wide memo of catalogs keyed by their bounds.
static CATALOGS: OnceLock<Mutex<HashMap<HardwareBounds, Arc<HardwareCatalog>>>> = OnceLock::new();

/// Return the catalog for `bounds`, generating it on first use.
pub fn cached_catalog(bounds: HardwareBounds) -> Result<Arc<HardwareCatalog>, HardwareError> {
    let cache = CATALOGS.get_or_init(|| Mutex::new(HashMap::new()));
    // Entries are only ever inserted whole, so a poisoned map is still usable.
    let mut catalogs = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(catalog) = catalogs.get(&bounds) {
        return Ok(Arc::clone(catalog));
    }

    let supplier = HardwareConfigSupplier::new(bounds)?;
    let catalog = supplier.get();
    catalogs.insert(bounds, Arc::clone(&catalog));
    Ok(catalog)
}
