//! Alias resolution into a concrete framework choice.
//!
//! Each framework kind carries a static alias table mapping `recommended`,
//! `latest` and `dev` to pinned versions (and, for `dev`, an explicit source
//! repository). Explicit `a.b.c` tokens bypass the table. Resolution is
//! deterministic: the same inputs always produce the same [`FrameworkChoice`].

use std::collections::BTreeMap;

use semver::Version;
use serde::Serialize;

use crate::config::AdvancedOptions;
use crate::diag::Diagnostics;
use crate::error::{ConfigError, Result};
use crate::kind::FrameworkKind;
use crate::version;

/// Source repository used by the `dev` alias of the Arduino framework.
pub const ARDUINO_DEV_REPOSITORY: &str = "https://github.com/espressif/arduino-esp32.git";

/// Source repository used by the `dev` alias of the ESP-IDF framework.
pub const ESP_IDF_DEV_REPOSITORY: &str = "https://github.com/espressif/esp-idf.git";

// NOTE on updating the pinned versions below: new framework releases have
// historically had regressions, especially around WiFi. A new recommended
// version needs thorough validation first, otherwise a fleet of devices can
// end up bricked.

/// The curated known-good framework version for a kind.
pub fn recommended_version(kind: FrameworkKind) -> Version {
    match kind {
        FrameworkKind::Arduino => Version::new(1, 0, 6),
        FrameworkKind::EspIdf | FrameworkKind::ArduinoIdf => Version::new(4, 3, 2),
    }
}

/// The newest release the alias table knows about.
fn latest_version(kind: FrameworkKind) -> Version {
    match kind {
        FrameworkKind::Arduino => Version::new(1, 0, 6),
        FrameworkKind::EspIdf | FrameworkKind::ArduinoIdf => Version::new(4, 3, 2),
    }
}

/// Bleeding-edge version and the repository it is fetched from.
fn dev_version(kind: FrameworkKind) -> (Version, &'static str) {
    match kind {
        FrameworkKind::Arduino => (Version::new(2, 0, 0), ARDUINO_DEV_REPOSITORY),
        FrameworkKind::EspIdf | FrameworkKind::ArduinoIdf => {
            (Version::new(5, 0, 0), ESP_IDF_DEV_REPOSITORY)
        }
    }
}

/// The `platformio/espressif32` platform version both kinds currently pin.
pub fn default_platform_version(_kind: FrameworkKind) -> Version {
    Version::new(3, 5, 0)
}

fn minimum_idf_version() -> Version {
    Version::new(4, 0, 0)
}

fn alias_lookup(kind: FrameworkKind, token: &str) -> Option<(Version, Option<&'static str>)> {
    match token {
        "dev" => {
            let (version, repository) = dev_version(kind);
            Some((version, Some(repository)))
        }
        "latest" => Some((latest_version(kind), None)),
        "recommended" => Some((recommended_version(kind), None)),
        _ => None,
    }
}

/// The read-only product of framework resolution.
///
/// Constructed once per build invocation during configuration validation;
/// the generation pass only reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkChoice {
    pub kind: FrameworkKind,
    /// Concrete resolved version.
    pub version: Version,
    /// Source package locator (registry spec or repository URL).
    pub source: String,
    /// Platform package locator.
    pub platform: String,
    /// User-supplied sdkconfig options, passed through verbatim.
    pub sdkconfig_options: BTreeMap<String, String>,
    pub advanced: AdvancedOptions,
}

/// Resolve a framework request into a concrete choice.
///
/// Fails on alias/source conflicts, malformed version tokens and ESP-IDF
/// versions below the supported minimum. Advisory conditions are pushed into
/// `diags` and never abort resolution.
pub fn resolve(
    kind: FrameworkKind,
    version_token: &str,
    source: Option<&str>,
    platform_version: Option<&str>,
    diags: &mut Diagnostics,
) -> Result<FrameworkChoice> {
    if kind == FrameworkKind::ArduinoIdf {
        diags.warn(
            "the arduino-idf framework is experimental; if there are connectivity or build \
             issues, switch to the arduino or esp-idf framework",
        );
        diags.warn(
            "if an arduino-idf build fails, clean the project before building again; some \
             modifications are not picked up after an incremental build",
        );
    }

    let (resolved, source_override) = match alias_lookup(kind, version_token) {
        Some((version, repository)) => {
            if source.is_some() {
                return Err(ConfigError::AliasSourceConflict);
            }
            (version, repository)
        }
        None => (version::parse(version_token)?, None),
    };

    if matches!(kind, FrameworkKind::EspIdf | FrameworkKind::ArduinoIdf)
        && resolved < minimum_idf_version()
    {
        return Err(ConfigError::UnsupportedIdfVersion { version: resolved });
    }

    let source = source_override
        .map(str::to_string)
        .or_else(|| source.map(str::to_string))
        .unwrap_or_else(|| match kind {
            FrameworkKind::Arduino => version::arduino_package_spec(&resolved),
            FrameworkKind::EspIdf | FrameworkKind::ArduinoIdf => {
                version::espidf_package_spec(&resolved)
            }
        });

    let platform_value = match platform_version {
        Some(value) => value.to_string(),
        None => default_platform_version(kind).to_string(),
    };
    let platform = version::platform_spec(&platform_value);

    if resolved != recommended_version(kind) {
        diags.warn(format!(
            "the selected {kind} framework version is not the recommended one; if there are \
             connectivity or build issues, remove the manual version"
        ));
    }

    Ok(FrameworkChoice {
        kind,
        version: resolved,
        source,
        platform,
        sdkconfig_options: BTreeMap::new(),
        advanced: AdvancedOptions::default(),
    })
}
