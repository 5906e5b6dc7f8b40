use serde::Deserialize;
use url::Url;

/// A vApp template as returned by a catalog query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VAppTemplateRecord {
    href: Url,
    name: String,
    #[serde(default)]
    catalog_name: String,
    #[serde(default)]
    status: String,
}

impl VAppTemplateRecord {
    pub fn new(href: Url, name: String, catalog_name: String, status: String) -> Self {
        Self {
            href,
            name,
            catalog_name,
            status,
        }
    }

    pub fn href(&self) -> &Url {
        &self.href
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    /// Raw provider status code
    /// eg. RESOLVED or 1
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Template id taken from the href: the last path segment with its
    /// `vappTemplate-` style prefix removed.
    pub fn vapp_id(&self) -> &str {
        let path = self.href.path();
        let last = path.rsplit('/').next().unwrap_or(path);
        last.split_once('-').map_or(last, |(_, id)| id)
    }
}
