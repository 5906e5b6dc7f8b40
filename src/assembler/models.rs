use url::Url;

use crate::cloud::{ImageStatus, TemplateDescriptor};

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("no descriptor for template {0}")]
    NotFound(Url),
    #[error("malformed descriptor for template {href}: {source}")]
    Malformed {
        href: Url,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed descriptor index: {0}")]
    Index(#[source] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("template status code is empty")]
    Empty,
}

/// Fetches the machine-readable descriptor of a vApp template.
#[async_trait::async_trait]
pub trait DescriptorFetcher {
    async fn fetch(&self, href: &Url) -> Result<TemplateDescriptor, FetchError>;
}

/// Maps a provider status code onto the portable status.
pub trait StatusTranslator {
    fn translate(&self, code: &str) -> Result<ImageStatus, StatusError>;
}
