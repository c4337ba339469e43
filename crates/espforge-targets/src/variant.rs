//! The closed set of ESP32 die variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// An ESP32 family die variant.
///
/// The canonical token (`ESP32S2`, …) is what appears in configuration files
/// and preprocessor macro suffixes; the friendly name (`ESP32-S2`) is what
/// ends up in human-facing string defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Variant {
    Esp32,
    Esp32S2,
    Esp32S3,
    Esp32C3,
    Esp32H2,
}

/// All known variants, in release order.
pub const ALL_VARIANTS: &[Variant] = &[
    Variant::Esp32,
    Variant::Esp32S2,
    Variant::Esp32S3,
    Variant::Esp32C3,
    Variant::Esp32H2,
];

impl Variant {
    /// Canonical upper-case token, used as a macro suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Esp32 => "ESP32",
            Variant::Esp32S2 => "ESP32S2",
            Variant::Esp32S3 => "ESP32S3",
            Variant::Esp32C3 => "ESP32C3",
            Variant::Esp32H2 => "ESP32H2",
        }
    }

    /// Human-facing product name.
    pub fn friendly_name(&self) -> &'static str {
        match self {
            Variant::Esp32 => "ESP32",
            Variant::Esp32S2 => "ESP32-S2",
            Variant::Esp32S3 => "ESP32-S3",
            Variant::Esp32C3 => "ESP32-C3",
            Variant::Esp32H2 => "ESP32-H2",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.to_ascii_uppercase();
        ALL_VARIANTS
            .iter()
            .find(|v| v.as_str() == token)
            .copied()
            .ok_or_else(|| TargetError::UnknownVariant {
                value: s.to_string(),
                expected: expected_list(),
            })
    }
}

/// Comma-separated list of valid variant tokens, for error text.
pub fn expected_list() -> String {
    ALL_VARIANTS
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
