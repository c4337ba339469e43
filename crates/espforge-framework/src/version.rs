//! Version parsing and package-locator formatting.
//!
//! Wraps the `semver` crate with the stricter `a.b.c` surface the manifest
//! accepts, and formats resolved versions into the locator strings the
//! PlatformIO package registry understands.

use semver::{Version, VersionReq};

use crate::error::{ConfigError, Result};

/// The platform package that hosts the ESP32 toolchain definitions.
pub const DEFAULT_PLATFORM_PACKAGE: &str = "platformio/espressif32";

/// Parse a strict `a.b.c` version triple.
///
/// Pre-release or build-metadata suffixes are rejected: the manifest surface
/// only ever carried plain triples, and a suffixed version would silently
/// change the package-locator formatting below.
pub fn parse(value: &str) -> Result<Version> {
    let version = Version::parse(value).map_err(|_| ConfigError::InvalidVersion {
        value: value.to_string(),
    })?;
    if !version.pre.is_empty() || !version.build.is_empty() {
        return Err(ConfigError::InvalidVersion {
            value: value.to_string(),
        });
    }
    Ok(version)
}

/// Registry locator for the `framework-arduinoespressif32` package.
///
/// Package versions on the registry encode the framework release as
/// `{major}{minor:02}{patch:02}`; releases up to 1.0.3 live in the 2.x
/// package line, everything later in 3.x.
pub fn arduino_package_spec(version: &Version) -> String {
    let line = if *version <= Version::new(1, 0, 3) { 2 } else { 3 };
    format!(
        "~{line}.{}{:02}{:02}.0",
        version.major, version.minor, version.patch
    )
}

/// Registry locator for the `framework-espidf` package (always the 3.x line).
pub fn espidf_package_spec(version: &Version) -> String {
    format!(
        "~3.{}{:02}{:02}.0",
        version.major, version.minor, version.patch
    )
}

/// Normalize a platform-version value.
///
/// A value that parses as a version-range constraint is pinned to the default
/// platform package; anything else (a git URL, an archive link) passes
/// through as a direct locator.
pub fn platform_spec(value: &str) -> String {
    if VersionReq::parse(value).is_ok() {
        format!("{DEFAULT_PLATFORM_PACKAGE} @ {value}")
    } else {
        value.to_string()
    }
}
