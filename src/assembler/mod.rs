mod fetcher;
mod models;
mod status;

pub use fetcher::JsonDescriptorFetcher;
pub use models::{DescriptorFetcher, FetchError, StatusError, StatusTranslator};
pub use status::VAppTemplateStatusTranslator;

use tracing::{debug, warn};

use crate::classifier::classify;
use crate::cloud::{OperatingSystem, PortableImage, TemplateDescriptor, VAppTemplateRecord};

/// OS description used when a template carries no virtual system at all.
pub const UNRECOGNIZED_DESCRIPTION: &str = "unrecognized";

#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Status(#[from] StatusError),
}

/// Turns vApp template query records into portable images.
#[derive(Debug, Clone)]
pub struct ImageForVAppTemplate<F, S> {
    fetcher: F,
    translator: S,
}

impl<F, S> ImageForVAppTemplate<F, S>
where
    F: DescriptorFetcher + Sync,
    S: StatusTranslator,
{
    pub fn new(fetcher: F, translator: S) -> Self {
        Self {
            fetcher,
            translator,
        }
    }

    pub async fn apply(&self, record: &VAppTemplateRecord) -> Result<PortableImage, ImageError> {
        let descriptor = self.fetcher.fetch(record.href()).await?;
        let operating_system = operating_system_for(record, &descriptor);
        let status = self.translator.translate(record.status())?;

        debug!(
            href = %record.href(),
            family = %operating_system.family(),
            %status,
            "assembled image"
        );

        Ok(PortableImage::new(
            record.vapp_id().to_string(),
            record.name().to_string(),
            format!("{}_{}", record.name(), record.catalog_name()),
            record.href().clone(),
            operating_system,
            status,
        ))
    }
}

fn operating_system_for(
    record: &VAppTemplateRecord,
    descriptor: &TemplateDescriptor,
) -> OperatingSystem {
    let Some(virtual_system) = descriptor.virtual_system() else {
        warn!(href = %record.href(), "template has no virtual system");
        return OperatingSystem::unrecognized(Some(UNRECOGNIZED_DESCRIPTION.to_string()));
    };

    match virtual_system.operating_system_section() {
        Some(section) => classify(section.os_type(), section.description()),
        None => classify(None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DescriptorFetcher, FetchError, ImageError, ImageForVAppTemplate, JsonDescriptorFetcher,
        StatusError, VAppTemplateStatusTranslator,
    };
    use crate::cloud::{ImageStatus, OsFamily, TemplateDescriptor, VAppTemplateRecord};
    use url::Url;

    const HREF: &str = "https://vcd.example.com/api/vAppTemplate/vappTemplate-0a1b-2c3d";

    fn record(status: &str) -> VAppTemplateRecord {
        VAppTemplateRecord::new(
            Url::parse(HREF).unwrap(),
            "centos6".to_string(),
            "public".to_string(),
            status.to_string(),
        )
    }

    fn assembler(descriptor: &str) -> ImageForVAppTemplate<JsonDescriptorFetcher, VAppTemplateStatusTranslator> {
        let json = format!(r#"{{"{HREF}": {descriptor}}}"#);
        ImageForVAppTemplate::new(
            JsonDescriptorFetcher::from_json_str(&json).unwrap(),
            VAppTemplateStatusTranslator,
        )
    }

    #[tokio::test]
    async fn builds_image_from_record_and_descriptor() {
        let images = assembler(
            r#"{"virtualSystem": {"operatingSystemSection": {
                "osType": "centos64Guest", "description": "CentOS 4/5/6 (64-bit)"}}}"#,
        );
        let image = images.apply(&record("RESOLVED")).await.unwrap();

        assert_eq!(image.id(), "0a1b-2c3d");
        assert_eq!(image.name(), "centos6");
        assert_eq!(image.description(), "centos6_public");
        assert_eq!(image.uri().as_str(), HREF);
        assert_eq!(image.status(), ImageStatus::Available);

        let os = image.operating_system();
        assert_eq!(os.family(), OsFamily::Centos);
        assert_eq!(os.version(), Some("4/5/6"));
        assert!(os.is_64_bit());
    }

    #[tokio::test]
    async fn missing_virtual_system_is_unrecognized() {
        let image = assembler("{}").apply(&record("1")).await.unwrap();
        let os = image.operating_system();
        assert_eq!(os.family(), OsFamily::Unrecognized);
        assert_eq!(os.description(), Some("unrecognized"));
        assert!(!os.is_64_bit());
    }

    #[tokio::test]
    async fn missing_os_section_classifies_nothing() {
        let image = assembler(r#"{"virtualSystem": {}}"#)
            .apply(&record("1"))
            .await
            .unwrap();
        let os = image.operating_system();
        assert_eq!(os.family(), OsFamily::Unrecognized);
        assert_eq!(os.description(), None);
    }

    #[tokio::test]
    async fn status_errors_propagate() {
        let err = assembler("{}").apply(&record("")).await.unwrap_err();
        assert!(matches!(err, ImageError::Status(StatusError::Empty)));
    }

    struct Unreachable;

    #[async_trait::async_trait]
    impl DescriptorFetcher for Unreachable {
        async fn fetch(&self, _href: &Url) -> Result<TemplateDescriptor, FetchError> {
            Err(FetchError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    #[tokio::test]
    async fn fetch_errors_propagate_unchanged() {
        let images = ImageForVAppTemplate::new(Unreachable, VAppTemplateStatusTranslator);
        let err = images.apply(&record("1")).await.unwrap_err();

        match err {
            ImageError::Fetch(FetchError::Io(io)) => {
                assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
