//! Typed device configuration.
//!
//! The manifest's framework block is a tagged union over the three framework
//! kinds; sdkconfig passthrough and advanced flags only exist on the
//! sdkconfig-capable variants. [`DeviceConfig::resolve`] performs variant
//! detection and framework resolution and yields the read-only
//! [`ResolvedDevice`] the generation pass consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use espforge_targets::{boards, Variant};

use crate::diag::Diagnostics;
use crate::error::{ConfigError, Result};
use crate::kind::FrameworkKind;
use crate::resolver::{self, FrameworkChoice};

fn default_version_token() -> String {
    "recommended".to_string()
}

/// Advanced, rarely-needed framework flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedOptions {
    /// Accept a burned-in MAC address whose CRC does not validate.
    pub ignore_efuse_mac_crc: bool,
}

/// The framework block of a device manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FrameworkConfig {
    Arduino {
        #[serde(default = "default_version_token")]
        version: String,
        #[serde(default)]
        source: Option<String>,
        #[serde(default)]
        platform_version: Option<String>,
    },
    EspIdf {
        #[serde(default = "default_version_token")]
        version: String,
        #[serde(default)]
        source: Option<String>,
        #[serde(default)]
        platform_version: Option<String>,
        #[serde(default)]
        sdkconfig_options: BTreeMap<String, String>,
        #[serde(default)]
        advanced: AdvancedOptions,
    },
    ArduinoIdf {
        #[serde(default = "default_version_token")]
        version: String,
        #[serde(default)]
        source: Option<String>,
        #[serde(default)]
        platform_version: Option<String>,
        #[serde(default)]
        sdkconfig_options: BTreeMap<String, String>,
        #[serde(default)]
        advanced: AdvancedOptions,
    },
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        FrameworkConfig::Arduino {
            version: default_version_token(),
            source: None,
            platform_version: None,
        }
    }
}

impl FrameworkConfig {
    pub fn kind(&self) -> FrameworkKind {
        match self {
            FrameworkConfig::Arduino { .. } => FrameworkKind::Arduino,
            FrameworkConfig::EspIdf { .. } => FrameworkKind::EspIdf,
            FrameworkConfig::ArduinoIdf { .. } => FrameworkKind::ArduinoIdf,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            FrameworkConfig::Arduino { version, .. }
            | FrameworkConfig::EspIdf { version, .. }
            | FrameworkConfig::ArduinoIdf { version, .. } => version,
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            FrameworkConfig::Arduino { source, .. }
            | FrameworkConfig::EspIdf { source, .. }
            | FrameworkConfig::ArduinoIdf { source, .. } => source.as_deref(),
        }
    }

    pub fn platform_version(&self) -> Option<&str> {
        match self {
            FrameworkConfig::Arduino {
                platform_version, ..
            }
            | FrameworkConfig::EspIdf {
                platform_version, ..
            }
            | FrameworkConfig::ArduinoIdf {
                platform_version, ..
            } => platform_version.as_deref(),
        }
    }

    /// User sdkconfig passthrough; absent on the pure Arduino framework.
    pub fn sdkconfig_options(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            FrameworkConfig::Arduino { .. } => None,
            FrameworkConfig::EspIdf {
                sdkconfig_options, ..
            }
            | FrameworkConfig::ArduinoIdf {
                sdkconfig_options, ..
            } => Some(sdkconfig_options),
        }
    }

    pub fn advanced(&self) -> AdvancedOptions {
        match self {
            FrameworkConfig::Arduino { .. } => AdvancedOptions::default(),
            FrameworkConfig::EspIdf { advanced, .. }
            | FrameworkConfig::ArduinoIdf { advanced, .. } => *advanced,
        }
    }
}

/// A device configuration prior to resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// PlatformIO board identifier.
    pub board: String,
    /// Explicit die variant; detected from the board registry if absent.
    #[serde(default)]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub framework: FrameworkConfig,
}

/// The validated, read-only result of device configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDevice {
    pub board: String,
    pub variant: Variant,
    pub choice: FrameworkChoice,
}

impl DeviceConfig {
    /// Detect the variant and resolve the framework request.
    pub fn resolve(&self, diags: &mut Diagnostics) -> Result<ResolvedDevice> {
        let variant = match self.variant {
            Some(variant) => variant,
            None => boards::variant_for_board(&self.board).ok_or_else(|| {
                ConfigError::UnknownBoard {
                    board: self.board.clone(),
                }
            })?,
        };

        let mut choice = resolver::resolve(
            self.framework.kind(),
            self.framework.version(),
            self.framework.source(),
            self.framework.platform_version(),
            diags,
        )?;
        if let Some(options) = self.framework.sdkconfig_options() {
            choice.sdkconfig_options = options.clone();
        }
        choice.advanced = self.framework.advanced();

        Ok(ResolvedDevice {
            board: self.board.clone(),
            variant,
            choice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> DeviceConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn parse_full_espidf_block() {
        let config = parse(
            r#"
board = "esp32dev"

[framework]
type = "esp-idf"
version = "4.4.0"
sdkconfig_options = { CONFIG_FREERTOS_UNICORE = "y" }

[framework.advanced]
ignore_efuse_mac_crc = true
"#,
        );
        assert_eq!(config.framework.kind(), FrameworkKind::EspIdf);
        assert_eq!(config.framework.version(), "4.4.0");
        assert!(config.framework.advanced().ignore_efuse_mac_crc);
        assert_eq!(
            config.framework.sdkconfig_options().unwrap()["CONFIG_FREERTOS_UNICORE"],
            "y"
        );
    }

    #[test]
    fn framework_defaults_to_arduino_recommended() {
        let config = parse(r#"board = "esp32dev""#);
        assert_eq!(config.framework.kind(), FrameworkKind::Arduino);
        assert_eq!(config.framework.version(), "recommended");
        assert!(config.framework.sdkconfig_options().is_none());
    }

    #[test]
    fn known_board_autofills_variant() {
        let config = parse(r#"board = "esp32-s3-devkitc-1""#);
        let mut diags = Diagnostics::new();
        let device = config.resolve(&mut diags).unwrap();
        assert_eq!(device.variant, Variant::Esp32S3);
    }

    #[test]
    fn unknown_board_names_the_field() {
        let config = parse(r#"board = "garage-door-9000""#);
        let mut diags = Diagnostics::new();
        let err = config.resolve(&mut diags).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBoard { .. }));
        assert!(err.to_string().contains("'board'"));
    }

    #[test]
    fn explicit_variant_covers_unknown_board() {
        let config = parse(
            r#"
board = "garage-door-9000"
variant = "ESP32C3"
"#,
        );
        let mut diags = Diagnostics::new();
        let device = config.resolve(&mut diags).unwrap();
        assert_eq!(device.variant, Variant::Esp32C3);
    }

    #[test]
    fn resolve_attaches_passthrough_options() {
        let config = parse(
            r#"
board = "esp32dev"

[framework]
type = "arduino-idf"
sdkconfig_options = { CONFIG_BT_ENABLED = "y" }
"#,
        );
        let mut diags = Diagnostics::new();
        let device = config.resolve(&mut diags).unwrap();
        assert_eq!(device.choice.kind, FrameworkKind::ArduinoIdf);
        assert_eq!(device.choice.sdkconfig_options["CONFIG_BT_ENABLED"], "y");
    }

    #[test]
    fn arduino_resolution_has_no_options() {
        let config = parse(r#"board = "esp32dev""#);
        let mut diags = Diagnostics::new();
        let device = config.resolve(&mut diags).unwrap();
        assert!(device.choice.sdkconfig_options.is_empty());
        assert!(!device.choice.advanced.ignore_efuse_mac_crc);
    }
}
