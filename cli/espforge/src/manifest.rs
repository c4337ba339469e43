//! `espforge.toml` device manifest parsing.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use espforge_framework::{DeviceConfig, FrameworkConfig};
use espforge_targets::Variant;

/// The top-level manifest for one device build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceManifest {
    pub device: DeviceSection,
    #[serde(default)]
    pub framework: FrameworkConfig,
}

/// Device identity section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSection {
    /// Build name; generated artifacts are namespaced by it.
    pub name: String,
    /// PlatformIO board identifier.
    pub board: String,
    /// Explicit die variant; auto-detected from the board when absent.
    #[serde(default)]
    pub variant: Option<Variant>,
}

impl DeviceManifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let manifest: DeviceManifest =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(manifest)
    }

    /// The resolver-facing view of this manifest.
    pub fn device_config(&self) -> DeviceConfig {
        DeviceConfig {
            board: self.device.board.clone(),
            variant: self.device.variant,
            framework: self.framework.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use espforge_framework::FrameworkKind;

    fn parse(toml_str: &str) -> DeviceManifest {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn parse_full_manifest() {
        let manifest = parse(
            r#"
[device]
name = "livingroom"
board = "esp32dev"

[framework]
type = "esp-idf"
version = "4.4.0"
sdkconfig_options = { CONFIG_FREERTOS_UNICORE = "y" }
"#,
        );
        assert_eq!(manifest.device.name, "livingroom");
        assert_eq!(manifest.device.board, "esp32dev");
        assert_eq!(manifest.framework.kind(), FrameworkKind::EspIdf);
        assert_eq!(manifest.framework.version(), "4.4.0");
    }

    #[test]
    fn framework_block_is_optional() {
        let manifest = parse(
            r#"
[device]
name = "porch"
board = "nodemcu-32s"
"#,
        );
        assert_eq!(manifest.framework.kind(), FrameworkKind::Arduino);
        assert_eq!(manifest.framework.version(), "recommended");
    }

    #[test]
    fn explicit_variant_is_forwarded() {
        let manifest = parse(
            r#"
[device]
name = "custom"
board = "some-oem-board"
variant = "ESP32S2"
"#,
        );
        let config = manifest.device_config();
        assert_eq!(config.variant, Some(Variant::Esp32S2));
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(toml::from_str::<DeviceManifest>("this is not valid toml [[[").is_err());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = DeviceManifest::load(Path::new("/nonexistent/espforge.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/espforge.toml"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("espforge.toml");
        std::fs::write(&path, "[device]\nname = \"here\"\nboard = \"esp32dev\"\n").unwrap();

        let manifest = DeviceManifest::load(&path).unwrap();
        assert_eq!(manifest.device.name, "here");
    }
}
