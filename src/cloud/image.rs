use serde::Serialize;
use std::fmt;
use url::Url;

use super::OperatingSystem;

/// Portable lifecycle state of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageStatus {
    Available,
    Pending,
    Deleted,
    Error,
    Unrecognized,
}

impl ImageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStatus::Available => "AVAILABLE",
            ImageStatus::Pending => "PENDING",
            ImageStatus::Deleted => "DELETED",
            ImageStatus::Error => "ERROR",
            ImageStatus::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalised representation of a bootable image, regardless of the
/// provider it was listed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortableImage {
    id: String,
    name: String,
    description: String,
    uri: Url,
    operating_system: OperatingSystem,
    status: ImageStatus,
}

impl PortableImage {
    pub fn new(
        id: String,
        name: String,
        description: String,
        uri: Url,
        operating_system: OperatingSystem,
        status: ImageStatus,
    ) -> Self {
        Self {
            id,
            name,
            description,
            uri,
            operating_system,
            status,
        }
    }

    /// Provider identifier
    /// eg. the uuid part of `vappTemplate-<uuid>`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<template name>_<catalog name>`
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn operating_system(&self) -> &OperatingSystem {
        &self.operating_system
    }

    pub fn status(&self) -> ImageStatus {
        self.status
    }
}

impl fmt::Display for PortableImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let os = &self.operating_system;
        write!(
            f,
            "{} | {} | {} {} {} | {}",
            self.id,
            self.name,
            os.family(),
            os.version().unwrap_or("-"),
            if os.is_64_bit() { "64-bit" } else { "32-bit" },
            self.status
        )
    }
}
