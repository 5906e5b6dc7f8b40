mod descriptor;
mod hardware;
mod image;
mod os;
mod template;

pub use descriptor::{OperatingSystemSection, TemplateDescriptor, VirtualSystem};
pub use hardware::{HYPERVISOR_ESXI, HardwareCatalog, HardwareProfile, Processor};
pub use image::{ImageStatus, PortableImage};
pub use os::{OperatingSystem, OsFamily};
pub use template::VAppTemplateRecord;
