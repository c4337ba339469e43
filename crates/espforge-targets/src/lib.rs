//! ESP32 target definitions for espforge.
//!
//! Models the closed set of ESP32 die variants, the board-identifier to
//! variant registry used for auto-detection, and the per-variant feature
//! gates that dependent modules apply during configuration validation.

pub mod boards;
pub mod error;
pub mod gate;
pub mod variant;

pub use error::{Result, TargetError};
pub use gate::VariantGate;
pub use variant::{Variant, ALL_VARIANTS};
