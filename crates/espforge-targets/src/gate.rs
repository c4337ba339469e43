//! Per-variant feature gating.
//!
//! Feature modules that only exist on some die variants (or are broken on
//! others) declare a gate and check the resolved variant against it during
//! configuration validation.

use crate::error::{Result, TargetError};
use crate::variant::Variant;

/// A supported/unsupported variant constraint for a feature.
#[derive(Debug, Clone, Default)]
pub struct VariantGate {
    supported: Option<Vec<Variant>>,
    unsupported: Option<Vec<Variant>>,
}

impl VariantGate {
    /// Gate that passes only on the listed variants.
    pub fn supported(variants: &[Variant]) -> Self {
        VariantGate {
            supported: Some(variants.to_vec()),
            unsupported: None,
        }
    }

    /// Gate that fails on the listed variants.
    pub fn unsupported(variants: &[Variant]) -> Self {
        VariantGate {
            supported: None,
            unsupported: Some(variants.to_vec()),
        }
    }

    /// Check a resolved variant against the gate.
    pub fn check(&self, variant: Variant) -> Result<()> {
        if let Some(supported) = &self.supported {
            if !supported.contains(&variant) {
                return Err(TargetError::OnlySupportedOn {
                    supported: join(supported),
                });
            }
        }
        if let Some(unsupported) = &self.unsupported {
            if unsupported.contains(&variant) {
                return Err(TargetError::NotAvailableOn {
                    unsupported: join(unsupported),
                });
            }
        }
        Ok(())
    }
}

fn join(variants: &[Variant]) -> String {
    variants
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_gate_passes_listed() {
        let gate = VariantGate::supported(&[Variant::Esp32, Variant::Esp32S3]);
        assert!(gate.check(Variant::Esp32).is_ok());
        assert!(gate.check(Variant::Esp32S3).is_ok());
    }

    #[test]
    fn supported_gate_rejects_others() {
        let gate = VariantGate::supported(&[Variant::Esp32]);
        let err = gate.check(Variant::Esp32C3).unwrap_err();
        assert!(err.to_string().contains("only available on ESP32"));
    }

    #[test]
    fn unsupported_gate_rejects_listed() {
        let gate = VariantGate::unsupported(&[Variant::Esp32S2]);
        let err = gate.check(Variant::Esp32S2).unwrap_err();
        assert!(err.to_string().contains("not available on ESP32S2"));
        assert!(gate.check(Variant::Esp32).is_ok());
    }

    #[test]
    fn default_gate_passes_everything() {
        let gate = VariantGate::default();
        assert!(gate.check(Variant::Esp32H2).is_ok());
    }
}
