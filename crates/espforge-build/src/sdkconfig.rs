//! Typed sdkconfig accumulation and persistence.
//!
//! Options accumulate across the generation pass (last write wins) and are
//! flushed once at the end. Two files are kept in the build directory:
//! `sdkconfig.<name>` is the authoritative file the SDK consumes (and may
//! later extend with defaults), `sdkconfig.<name>.espforgeinternal` records
//! what this tool last wrote. The internal snapshot is what change detection
//! compares against, so an unchanged option set never touches either file.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fsutil::write_file_if_changed;

/// A typed sdkconfig value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkValue {
    Bool(bool),
    Int(i64),
    /// Emitted wrapped in double quotes.
    Str(String),
    /// Emitted verbatim, without quoting or escaping. Used for values the
    /// SDK's own config tooling must evaluate literally, e.g. hex literals.
    Raw(String),
}

impl SdkValue {
    /// Verbatim passthrough value.
    pub fn raw(value: impl Into<String>) -> Self {
        SdkValue::Raw(value.into())
    }

    /// Render in sdkconfig syntax.
    pub fn render(&self) -> String {
        match self {
            SdkValue::Bool(true) => "y".to_string(),
            SdkValue::Bool(false) => "n".to_string(),
            SdkValue::Int(value) => value.to_string(),
            SdkValue::Str(value) => format!("\"{value}\""),
            SdkValue::Raw(value) => value.clone(),
        }
    }
}

impl From<bool> for SdkValue {
    fn from(value: bool) -> Self {
        SdkValue::Bool(value)
    }
}

impl From<i64> for SdkValue {
    fn from(value: i64) -> Self {
        SdkValue::Int(value)
    }
}

impl From<i32> for SdkValue {
    fn from(value: i32) -> Self {
        SdkValue::Int(value.into())
    }
}

impl From<&str> for SdkValue {
    fn from(value: &str) -> Self {
        SdkValue::Str(value.to_string())
    }
}

impl From<String> for SdkValue {
    fn from(value: String) -> Self {
        SdkValue::Str(value)
    }
}

/// Accumulated sdkconfig options for one build.
#[derive(Debug, Clone, Default)]
pub struct SdkconfigOptions {
    entries: HashMap<String, SdkValue>,
}

impl SdkconfigOptions {
    pub fn new() -> Self {
        SdkconfigOptions::default()
    }

    /// Insert or overwrite an option.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<SdkValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&SdkValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the newline-terminated `name=value` body.
    ///
    /// Keys are sorted ascending by byte value, so the body is byte-identical
    /// for the same option set regardless of insertion order.
    pub fn render_body(&self) -> String {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();

        let mut body = String::new();
        for key in keys {
            let _ = writeln!(body, "{key}={}", self.entries[key].render());
        }
        body
    }

    /// Flush to the build directory; returns whether anything was written.
    ///
    /// Only rewrites the authoritative file when the body differs from the
    /// internal tracking snapshot, to avoid invalidating the downstream
    /// build cache on unchanged content.
    pub fn write(&self, build_dir: &Path, name: &str) -> Result<bool> {
        let body = self.render_body();
        let tracking = tracking_path(build_dir, name);
        let authoritative = authoritative_path(build_dir, name);

        if write_file_if_changed(&tracking, &body)? {
            // tracking snapshot changed, update the real one
            write_file_if_changed(&authoritative, &body)?;
            return Ok(true);
        }
        Ok(false)
    }
}

/// Path of the authoritative sdkconfig file for a build.
pub fn authoritative_path(build_dir: &Path, name: &str) -> PathBuf {
    build_dir.join(format!("sdkconfig.{name}"))
}

/// Path of the last-written tracking snapshot.
pub fn tracking_path(build_dir: &Path, name: &str) -> PathBuf {
    build_dir.join(format!("sdkconfig.{name}.espforgeinternal"))
}
