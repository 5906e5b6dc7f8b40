pub mod assembler;
pub mod classifier;
pub mod cloud;
pub mod config;
pub mod hardware;
pub mod options;

pub use assembler::{ImageError, ImageForVAppTemplate};
pub use classifier::{classify, extract_version};
pub use hardware::{HardwareConfigSupplier, HardwareError, generate_catalog};
