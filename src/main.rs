mod helpers;

use anyhow::{Context, Result};
use std::{env, fs, path::PathBuf};
use tracing::{info, warn};

use vcloud_compute_metadata::assembler::{JsonDescriptorFetcher, VAppTemplateStatusTranslator};
use vcloud_compute_metadata::cloud::{HardwareProfile, PortableImage, VAppTemplateRecord};
use vcloud_compute_metadata::options::TemplateOptions;
use vcloud_compute_metadata::{HardwareConfigSupplier, ImageForVAppTemplate, config};

use crate::helpers::{choose_one, init_tracing};

/// Env var holding provider properties as JSON; wins over the bundled file.
const PROPERTIES_ENV: &str = "VCD_PROPERTIES";

fn resource_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources").join(name)
}

fn load_properties() -> Result<()> {
    if env::var_os(PROPERTIES_ENV).is_some() {
        config::init_from_env(PROPERTIES_ENV)
            .with_context(|| format!("load properties from ${PROPERTIES_ENV}"))?;
    } else {
        let path = resource_path("properties.json");
        config::init_from_file(&path)
            .with_context(|| format!("load properties from {}", path.display()))?;
    }
    Ok(())
}

fn load_templates() -> Result<Vec<VAppTemplateRecord>> {
    let path = resource_path("templates.json");
    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parse JSON from {}", path.display()))
}

fn print_image(image: &PortableImage) {
    let os = image.operating_system();
    println!("\n=== Image ===");
    println!("Id:       {}", image.id());
    println!("Name:     {}", image.name());
    println!("Desc:     {}", image.description());
    println!("Uri:      {}", image.uri());
    println!("Status:   {}", image.status());
    println!("OS:");
    println!("  family:  {}", os.family());
    println!("  version: {}", os.version().unwrap_or("<none>"));
    println!("  64-bit:  {}", os.is_64_bit());
    println!("  desc:    {}", os.description().unwrap_or("<none>"));
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    load_properties()?;

    let bounds = config::hardware_bounds()?;
    let supplier = HardwareConfigSupplier::new(bounds)?;

    let fetcher = JsonDescriptorFetcher::from_file(resource_path("descriptors.json"))
        .context("load template descriptors")?;
    let images = ImageForVAppTemplate::new(fetcher, VAppTemplateStatusTranslator);

    for record in load_templates()? {
        match images.apply(&record).await {
            Ok(image) => print_image(&image),
            Err(err) => warn!(href = %record.href(), "skipping template: {err}"),
        }
    }

    let catalog = supplier.get();
    let profiles: Vec<HardwareProfile> = catalog.iter().cloned().collect();
    let profile = choose_one("Select Hardware Profile", profiles)?;
    info!(profile = profile.id(), "hardware profile selected");

    let options = TemplateOptions::new()
        .with_virtual_cpus(profile.cpu_count())
        .with_memory(profile.ram_mb());

    println!("\n=== Selection ===");
    println!("Profile:  {profile}");
    println!("Options:  {}", serde_json::to_string(&options)?);

    Ok(())
}
