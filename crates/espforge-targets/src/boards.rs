//! Board-identifier to chip-variant registry.
//!
//! PlatformIO board identifiers carry no machine-readable variant field, so
//! auto-detection goes through this table. An unknown board is not an error
//! at this layer; the configuration layer decides whether an explicit
//! variant makes up for a missing entry.

use crate::variant::Variant;

/// Board id → variant, sorted ascending by board id (bytewise).
const BOARD_TABLE: &[(&str, Variant)] = &[
    ("adafruit_feather_esp32s2", Variant::Esp32S2),
    ("adafruit_feather_esp32s3", Variant::Esp32S3),
    ("adafruit_funhouse_esp32s2", Variant::Esp32S2),
    ("adafruit_qtpy_esp32c3", Variant::Esp32C3),
    ("adafruit_qtpy_esp32s2", Variant::Esp32S2),
    ("adafruit_qtpy_esp32s3_nopsram", Variant::Esp32S3),
    ("esp-wrover-kit", Variant::Esp32),
    ("esp32-c3-devkitc-02", Variant::Esp32C3),
    ("esp32-c3-devkitm-1", Variant::Esp32C3),
    ("esp32-h2-devkitm-1", Variant::Esp32H2),
    ("esp32-s2-kaluga-1", Variant::Esp32S2),
    ("esp32-s2-saola-1", Variant::Esp32S2),
    ("esp32-s3-devkitc-1", Variant::Esp32S3),
    ("esp32cam", Variant::Esp32),
    ("esp32dev", Variant::Esp32),
    ("esp32doit-devkit-v1", Variant::Esp32),
    ("esp32thing", Variant::Esp32),
    ("esp32thing_plus", Variant::Esp32),
    ("featheresp32", Variant::Esp32),
    ("featheresp32-s2", Variant::Esp32S2),
    ("firebeetle32", Variant::Esp32),
    ("heltec_wifi_kit_32", Variant::Esp32),
    ("heltec_wifi_lora_32_V2", Variant::Esp32),
    ("lolin32", Variant::Esp32),
    ("lolin32_lite", Variant::Esp32),
    ("lolin_c3_mini", Variant::Esp32C3),
    ("lolin_d32", Variant::Esp32),
    ("lolin_d32_pro", Variant::Esp32),
    ("lolin_s2_mini", Variant::Esp32S2),
    ("m5stack-atom", Variant::Esp32),
    ("m5stack-core-esp32", Variant::Esp32),
    ("m5stack-core2", Variant::Esp32),
    ("m5stack-fire", Variant::Esp32),
    ("m5stick-c", Variant::Esp32),
    ("nodemcu-32s", Variant::Esp32),
    ("ttgo-lora32-v1", Variant::Esp32),
    ("ttgo-t-beam", Variant::Esp32),
    ("ttgo-t1", Variant::Esp32),
    ("wemos_d1_mini32", Variant::Esp32),
    ("wesp32", Variant::Esp32),
];

/// Look up the die variant for a board identifier.
pub fn variant_for_board(board: &str) -> Option<Variant> {
    BOARD_TABLE
        .binary_search_by(|(name, _)| name.cmp(&board))
        .ok()
        .map(|idx| BOARD_TABLE[idx].1)
}

/// All known board ids with their variants, sorted by board id.
pub fn known_boards() -> impl Iterator<Item = (&'static str, Variant)> {
    BOARD_TABLE.iter().copied()
}

/// Known board ids restricted to one variant, sorted by board id.
pub fn boards_for_variant(variant: Variant) -> impl Iterator<Item = &'static str> {
    BOARD_TABLE
        .iter()
        .filter(move |(_, v)| *v == variant)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        // binary_search relies on this
        let names: Vec<&str> = BOARD_TABLE.iter().map(|(n, _)| *n).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn known_board_lookup() {
        assert_eq!(variant_for_board("esp32dev"), Some(Variant::Esp32));
        assert_eq!(
            variant_for_board("esp32-s3-devkitc-1"),
            Some(Variant::Esp32S3)
        );
        assert_eq!(variant_for_board("lolin_c3_mini"), Some(Variant::Esp32C3));
    }

    #[test]
    fn unknown_board_returns_none() {
        assert_eq!(variant_for_board("d1_mini"), None);
        assert_eq!(variant_for_board(""), None);
    }

    #[test]
    fn variant_filter() {
        let s2: Vec<&str> = boards_for_variant(Variant::Esp32S2).collect();
        assert!(s2.contains(&"esp32-s2-saola-1"));
        assert!(!s2.contains(&"esp32dev"));
    }
}
