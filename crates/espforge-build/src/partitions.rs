//! Fixed on-flash partition layouts.
//!
//! One layout per framework kind, selected once per build and never mutated.
//! Offsets and sizes are load-bearing: the Arduino core and the IDF
//! bootloader make different assumptions about where the first app slot
//! starts, and the hybrid build needs the larger app slots.

use espforge_framework::FrameworkKind;

/// Layout for pure Arduino builds.
pub const ARDUINO_PARTITIONS_CSV: &str = "\
nvs,      data, nvs,     0x009000, 0x005000,
otadata,  data, ota,     0x00e000, 0x002000,
app0,     app,  ota_0,   0x010000, 0x1C0000,
app1,     app,  ota_1,   0x1D0000, 0x1C0000,
eeprom,   data, 0x99,    0x390000, 0x001000,
spiffs,   data, spiffs,  0x391000, 0x00F000
";

/// Layout for pure ESP-IDF builds; offsets are left for the IDF tooling to
/// assign.
pub const ESP_IDF_PARTITIONS_CSV: &str = "\
# Name,   Type, SubType, Offset,   Size, Flags
nvs,      data, nvs,     ,        0x4000,
otadata,  data, ota,     ,        0x2000,
phy_init, data, phy,     ,        0x1000,
app0,     app,  ota_0,   ,      0x1C0000,
app1,     app,  ota_1,   ,      0x1C0000,
";

/// Layout for hybrid Arduino-on-IDF builds.
pub const ARDUINO_IDF_PARTITIONS_CSV: &str = "\
# Name,   Type, SubType, Offset,  Size, Flags
nvs,      data, nvs,     0x009000, 0x005000,
otadata,  data, ota,     0x00e000, 0x002000,
app0,     app,  ota_0,   0x010000, 0x200000,
app1,     app,  ota_1,   0x210000, 0x1F0000,
";

/// Select the partition layout for a framework kind.
pub fn select(kind: FrameworkKind) -> &'static str {
    match kind {
        FrameworkKind::Arduino => ARDUINO_PARTITIONS_CSV,
        FrameworkKind::EspIdf => ESP_IDF_PARTITIONS_CSV,
        FrameworkKind::ArduinoIdf => ARDUINO_IDF_PARTITIONS_CSV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_is_total() {
        assert_eq!(select(FrameworkKind::Arduino), ARDUINO_PARTITIONS_CSV);
        assert_eq!(select(FrameworkKind::EspIdf), ESP_IDF_PARTITIONS_CSV);
        assert_eq!(select(FrameworkKind::ArduinoIdf), ARDUINO_IDF_PARTITIONS_CSV);
    }

    #[test]
    fn layouts_are_distinct() {
        assert_ne!(ARDUINO_PARTITIONS_CSV, ESP_IDF_PARTITIONS_CSV);
        assert_ne!(ARDUINO_PARTITIONS_CSV, ARDUINO_IDF_PARTITIONS_CSV);
        assert_ne!(ESP_IDF_PARTITIONS_CSV, ARDUINO_IDF_PARTITIONS_CSV);
    }

    #[test]
    fn arduino_layout_keeps_eeprom_and_spiffs() {
        assert!(ARDUINO_PARTITIONS_CSV.contains("eeprom"));
        assert!(ARDUINO_PARTITIONS_CSV.contains("spiffs"));
        assert!(!ESP_IDF_PARTITIONS_CSV.contains("spiffs"));
    }

    #[test]
    fn all_layouts_have_two_app_slots() {
        for csv in [
            ARDUINO_PARTITIONS_CSV,
            ESP_IDF_PARTITIONS_CSV,
            ARDUINO_IDF_PARTITIONS_CSV,
        ] {
            assert!(csv.contains("ota_0"));
            assert!(csv.contains("ota_1"));
        }
    }
}
