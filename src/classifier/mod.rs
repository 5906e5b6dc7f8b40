//! Guest OS classification for vApp templates.
//!
//! The provider only reports a vendor os type token (`centos64Guest`,
//! `windows7Server64Guest`, ...) and a free text description. Family and
//! bitness come from the token, the version from whichever of the two
//! carries it.

use tracing::debug;

use crate::cloud::{OperatingSystem, OsFamily};

/// Token prefixes in the order they are tried. First match wins.
const FAMILY_KEYWORDS: &[(&str, OsFamily)] = &[
    ("centos", OsFamily::Centos),
    ("ubuntu", OsFamily::Ubuntu),
    ("windows", OsFamily::Windows),
    ("sles", OsFamily::Suse),
];

fn is_64_bit(os_type: &str) -> bool {
    os_type.contains("64")
}

fn family_for(os_type: &str) -> Option<(&'static str, OsFamily)> {
    FAMILY_KEYWORDS
        .iter()
        .find(|(keyword, _)| os_type.starts_with(keyword))
        .copied()
}

/// Classify a guest OS from its vendor token and description.
///
/// Never fails: a missing or unknown token yields
/// [`OsFamily::Unrecognized`] with no version.
pub fn classify(os_type: Option<&str>, description: Option<&str>) -> OperatingSystem {
    let description_owned = description.map(str::to_string);

    let Some(os_type) = os_type.filter(|t| !t.is_empty()) else {
        debug!("no os type token, leaving os unrecognized");
        return OperatingSystem::unrecognized(description_owned);
    };

    let is_64_bit = is_64_bit(os_type);

    let Some((keyword, family)) = family_for(os_type) else {
        debug!(os_type, "os type token matches no known family");
        return OperatingSystem::new(OsFamily::Unrecognized, None, is_64_bit, description_owned);
    };

    let version = extract_version(keyword, Some(os_type), description);
    debug!(os_type, %family, ?version, is_64_bit, "classified os");

    OperatingSystem::new(family, version, is_64_bit, description_owned)
}

/// Derive a version string for `family_keyword`.
///
/// A token carrying `_` wins: its first `_`-separated segment minus the
/// keyword's length, trimmed (`ubuntu 12.04_64` -> `12.04`). Otherwise the
/// description, cut at ` (`, yields whatever follows the keyword
/// (`CentOS 4/5/6 (64-bit)` -> `4/5/6`).
pub fn extract_version(
    family_keyword: &str,
    os_type: Option<&str>,
    description: Option<&str>,
) -> Option<String> {
    if let Some(os_type) = os_type
        && os_type.contains('_')
    {
        let segment = os_type.split('_').next().unwrap_or_default();
        // Drops the first len(keyword) bytes whether or not the keyword is
        // actually there; tokens reaching this point start with it.
        let rest = segment.get(family_keyword.len()..).unwrap_or_default();
        return Some(rest.trim().to_string());
    }

    let description = description?;
    let stripped = match description.find(" (") {
        Some(idx) => &description[..idx],
        None => description,
    };

    // ASCII lowering keeps byte offsets aligned with `stripped`.
    let idx = stripped.to_ascii_lowercase().find(family_keyword)?;
    Some(stripped[idx + family_keyword.len()..].trim().to_string())
}
