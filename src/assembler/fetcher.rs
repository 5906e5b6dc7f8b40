use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::{DescriptorFetcher, FetchError};
use crate::cloud::TemplateDescriptor;

/// Offline fetcher backed by a JSON object mapping template hrefs to their
/// descriptors. Entries are parsed lazily so one bad descriptor only fails
/// the template it belongs to.
#[derive(Debug, Clone, Default)]
pub struct JsonDescriptorFetcher {
    descriptors: HashMap<String, serde_json::Value>,
}

impl JsonDescriptorFetcher {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let descriptors = serde_json::from_str(json)?;
        Ok(Self { descriptors })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data).map_err(FetchError::Index)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[async_trait::async_trait]
impl DescriptorFetcher for JsonDescriptorFetcher {
    async fn fetch(&self, href: &Url) -> Result<TemplateDescriptor, FetchError> {
        let raw = self
            .descriptors
            .get(href.as_str())
            .ok_or_else(|| FetchError::NotFound(href.clone()))?;

        TemplateDescriptor::deserialize(raw).map_err(|source| FetchError::Malformed {
            href: href.clone(),
            source,
        })
    }
}
