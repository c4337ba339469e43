//! The per-build mutable state threaded through the generation pass.
//!
//! One `BuildContext` exists per build invocation. Feature modules append
//! PlatformIO options, build flags, preprocessor defines and sdkconfig
//! options to it; the emission step then renders everything to disk. The
//! context is passed by reference through the strictly sequential pass, so
//! there is no hidden shared state and no locking.

use std::collections::BTreeMap;

use semver::Version;

use espforge_framework::{FrameworkKind, ResolvedDevice};

use crate::error::{BuildError, Result};
use crate::sdkconfig::{SdkValue, SdkconfigOptions};

/// A PlatformIO project-option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PioValue {
    Str(String),
    List(Vec<String>),
}

impl From<&str> for PioValue {
    fn from(value: &str) -> Self {
        PioValue::Str(value.to_string())
    }
}

impl From<String> for PioValue {
    fn from(value: String) -> Self {
        PioValue::Str(value)
    }
}

impl From<Vec<String>> for PioValue {
    fn from(value: Vec<String>) -> Self {
        PioValue::List(value)
    }
}

/// The value part of a preprocessor define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineValue {
    /// Rendered with escaped quotes, `-DNAME=\"value\"`.
    Str(String),
    /// Rendered verbatim, `-DNAME=expr`.
    Raw(String),
}

/// A preprocessor define destined for the build flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: String,
    pub value: Option<DefineValue>,
}

/// Accumulated build state for one invocation.
#[derive(Debug, Clone)]
pub struct BuildContext {
    name: String,
    kind: FrameworkKind,
    version: Version,
    options: BTreeMap<String, PioValue>,
    build_flags: Vec<String>,
    defines: Vec<Define>,
    sdkconfig: SdkconfigOptions,
}

impl BuildContext {
    /// Create a context for a named build of a resolved device.
    pub fn new(name: impl Into<String>, device: &ResolvedDevice) -> Self {
        BuildContext {
            name: name.into(),
            kind: device.choice.kind,
            version: device.choice.version.clone(),
            options: BTreeMap::new(),
            build_flags: Vec::new(),
            defines: Vec::new(),
            sdkconfig: SdkconfigOptions::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FrameworkKind {
        self.kind
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn sdkconfig(&self) -> &SdkconfigOptions {
        &self.sdkconfig
    }

    /// PlatformIO options, sorted by key.
    pub fn pio_options(&self) -> impl Iterator<Item = (&str, &PioValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn build_flags(&self) -> &[String] {
        &self.build_flags
    }

    pub fn defines(&self) -> &[Define] {
        &self.defines
    }

    /// Insert or overwrite a PlatformIO project option.
    pub fn add_platformio_option(&mut self, key: impl Into<String>, value: impl Into<PioValue>) {
        self.options.insert(key.into(), value.into());
    }

    /// Append a raw compiler flag.
    pub fn add_build_flag(&mut self, flag: impl Into<String>) {
        self.build_flags.push(flag.into());
    }

    /// Define a bare preprocessor symbol.
    pub fn add_define(&mut self, name: impl Into<String>) {
        self.defines.push(Define {
            name: name.into(),
            value: None,
        });
    }

    /// Define a symbol with a C string value.
    pub fn add_define_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.defines.push(Define {
            name: name.into(),
            value: Some(DefineValue::Str(value.into())),
        });
    }

    /// Define a symbol with an expression emitted verbatim.
    pub fn add_define_raw(&mut self, name: impl Into<String>, expr: impl Into<String>) {
        self.defines.push(Define {
            name: name.into(),
            value: Some(DefineValue::Raw(expr.into())),
        });
    }

    /// Set an sdkconfig option.
    ///
    /// Fails when the active framework has no sdkconfig concept.
    pub fn add_sdkconfig_option(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SdkValue>,
    ) -> Result<()> {
        if !self.kind.supports_sdkconfig() {
            return Err(BuildError::NotAnEspIdfProject);
        }
        self.sdkconfig.set(name, value);
        Ok(())
    }

    /// Build flags followed by rendered defines, in insertion order.
    pub fn render_build_flags(&self) -> Vec<String> {
        let mut flags = self.build_flags.clone();
        for define in &self.defines {
            flags.push(match &define.value {
                None => format!("-D{}", define.name),
                Some(DefineValue::Str(value)) => format!("-D{}=\\\"{}\\\"", define.name, value),
                Some(DefineValue::Raw(expr)) => format!("-D{}={}", define.name, expr),
            });
        }
        flags
    }
}
