//! The closed set of build frameworks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The embedded runtime/build environment selected for a build.
///
/// `ArduinoIdf` is the hybrid mode: the firmware is written against the
/// Arduino compatibility layer but built by the ESP-IDF toolchain, so it
/// carries an sdkconfig like `EspIdf` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkKind {
    Arduino,
    EspIdf,
    ArduinoIdf,
}

impl FrameworkKind {
    /// Configuration token.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkKind::Arduino => "arduino",
            FrameworkKind::EspIdf => "esp-idf",
            FrameworkKind::ArduinoIdf => "arduino-idf",
        }
    }

    /// The framework the application code is written against.
    ///
    /// Dependent feature modules key off this: hybrid builds look like
    /// Arduino to them.
    pub fn compat_kind(&self) -> FrameworkKind {
        match self {
            FrameworkKind::ArduinoIdf => FrameworkKind::Arduino,
            other => *other,
        }
    }

    /// Whether this framework carries an sdkconfig key/value store.
    pub fn supports_sdkconfig(&self) -> bool {
        !matches!(self, FrameworkKind::Arduino)
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arduino" => Ok(FrameworkKind::Arduino),
            "esp-idf" => Ok(FrameworkKind::EspIdf),
            "arduino-idf" => Ok(FrameworkKind::ArduinoIdf),
            other => Err(format!(
                "unknown framework '{other}', expected one of arduino, esp-idf, arduino-idf"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for kind in [
            FrameworkKind::Arduino,
            FrameworkKind::EspIdf,
            FrameworkKind::ArduinoIdf,
        ] {
            assert_eq!(kind.as_str().parse::<FrameworkKind>().unwrap(), kind);
        }
    }

    #[test]
    fn hybrid_is_arduino_compatible() {
        assert_eq!(
            FrameworkKind::ArduinoIdf.compat_kind(),
            FrameworkKind::Arduino
        );
        assert_eq!(FrameworkKind::EspIdf.compat_kind(), FrameworkKind::EspIdf);
    }

    #[test]
    fn sdkconfig_support() {
        assert!(!FrameworkKind::Arduino.supports_sdkconfig());
        assert!(FrameworkKind::EspIdf.supports_sdkconfig());
        assert!(FrameworkKind::ArduinoIdf.supports_sdkconfig());
    }

    #[test]
    fn unknown_token_lists_expected() {
        let err = "espidf".parse::<FrameworkKind>().unwrap_err();
        assert!(err.contains("arduino-idf"));
    }

    #[test]
    fn serde_uses_kebab_tokens() {
        let json = serde_json::to_string(&FrameworkKind::EspIdf).unwrap();
        assert_eq!(json, "\"esp-idf\"");
    }
}
