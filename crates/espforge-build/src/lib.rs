//! Build-side state and artifact emission for espforge.
//!
//! A [`context::BuildContext`] is created from a resolved device, populated
//! by the generation pass ([`generate::populate`]) and flushed to disk by
//! [`emit::emit`]. All file writes are change-detecting so an unchanged
//! configuration never invalidates the downstream build cache.

pub mod context;
pub mod emit;
pub mod error;
pub mod fsutil;
pub mod generate;
pub mod partitions;
pub mod sdkconfig;

pub use context::BuildContext;
pub use emit::{emit, EmitReport};
pub use error::{BuildError, Result};
pub use generate::populate;
pub use sdkconfig::{SdkValue, SdkconfigOptions};
