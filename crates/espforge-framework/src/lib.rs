//! Framework selection and version resolution for espforge.
//!
//! A device manifest names a framework kind (`arduino`, `esp-idf`,
//! `arduino-idf`) and a version token (an alias like `recommended` or an
//! explicit `a.b.c`). This crate resolves that request into a concrete
//! [`FrameworkChoice`]: a pinned version, a source-package locator and a
//! platform-package locator, validated against the minimum-version and
//! alias/source-exclusivity rules. Advisory conditions (non-default version,
//! experimental hybrid framework) are collected as [`diag::Diagnostic`]s and
//! never abort resolution.

pub mod config;
pub mod diag;
pub mod error;
pub mod kind;
pub mod resolver;
pub mod version;

pub use config::{AdvancedOptions, DeviceConfig, FrameworkConfig, ResolvedDevice};
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::{ConfigError, Result};
pub use kind::FrameworkKind;
pub use resolver::{resolve, FrameworkChoice};
