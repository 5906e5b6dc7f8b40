use super::{StatusError, StatusTranslator};
use crate::cloud::ImageStatus;

/// vCloud Director vApp template status codes, numeric or symbolic.
#[derive(Debug, Clone, Copy, Default)]
pub struct VAppTemplateStatusTranslator;

impl StatusTranslator for VAppTemplateStatusTranslator {
    fn translate(&self, code: &str) -> Result<ImageStatus, StatusError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(StatusError::Empty);
        }

        Ok(match code.to_ascii_uppercase().as_str() {
            "1" | "RESOLVED" | "8" | "POWERED_OFF" => ImageStatus::Available,
            "0" | "UNRESOLVED" => ImageStatus::Pending,
            "-1" | "FAILED_CREATION" => ImageStatus::Error,
            _ => ImageStatus::Unrecognized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::VAppTemplateStatusTranslator;
    use crate::assembler::{StatusError, StatusTranslator};
    use crate::cloud::ImageStatus;

    #[test]
    fn symbolic_and_numeric_codes() {
        let t = VAppTemplateStatusTranslator;
        assert_eq!(t.translate("RESOLVED"), Ok(ImageStatus::Available));
        assert_eq!(t.translate("1"), Ok(ImageStatus::Available));
        assert_eq!(t.translate("powered_off"), Ok(ImageStatus::Available));
        assert_eq!(t.translate("UNRESOLVED"), Ok(ImageStatus::Pending));
        assert_eq!(t.translate("-1"), Ok(ImageStatus::Error));
    }

    #[test]
    fn unknown_code_is_unrecognized() {
        assert_eq!(
            VAppTemplateStatusTranslator.translate("MIXED"),
            Ok(ImageStatus::Unrecognized)
        );
    }

    #[test]
    fn empty_code_fails() {
        assert_eq!(
            VAppTemplateStatusTranslator.translate("  "),
            Err(StatusError::Empty)
        );
    }
}
