//! The generation pass: from a resolved device to a populated context.
//!
//! One dispatch over the framework kind; everything the three modes share
//! sits before the match. Option names and values mirror what the external
//! toolchain expects, so they are spelled out literally here.

use semver::Version;

use espforge_framework::{FrameworkChoice, FrameworkKind, ResolvedDevice};

use crate::context::BuildContext;
use crate::error::Result;
use crate::sdkconfig::SdkValue;

/// Platform archive pinned for hybrid builds; known to work with the
/// arduino-compat option set below, unlike the mainline platform releases.
const HYBRID_PLATFORM_ARCHIVE: &str = "https://github.com/tasmota/platform-espressif32/releases/download/v2.0.4.1/platform-espressif32-2.0.4.1.zip";

/// Populate a build context from a resolved device.
pub fn populate(ctx: &mut BuildContext, device: &ResolvedDevice) -> Result<()> {
    let choice = &device.choice;

    ctx.add_platformio_option("board", device.board.as_str());
    ctx.add_build_flag("-DUSE_ESP32");
    ctx.add_define_value("ESPFORGE_BOARD", &device.board);
    ctx.add_build_flag(format!("-DUSE_ESP32_VARIANT_{}", device.variant.as_str()));
    ctx.add_define_value("ESPFORGE_VARIANT", device.variant.friendly_name());
    ctx.add_platformio_option("lib_ldf_mode", "off");
    ctx.add_platformio_option("platform", choice.platform.as_str());
    ctx.add_platformio_option("board_build.partitions", "partitions.csv");

    match choice.kind {
        FrameworkKind::EspIdf => {
            ctx.add_platformio_option("framework", "espidf");
            ctx.add_build_flag("-DUSE_ESP_IDF");
            ctx.add_build_flag("-DUSE_ESP32_FRAMEWORK_ESP_IDF");
            ctx.add_build_flag("-Wno-nonnull-compare");
            ctx.add_platformio_option(
                "platform_packages",
                vec![format!("platformio/framework-espidf @ {}", choice.source)],
            );

            idf_baseline(ctx)?;
            apply_user_options(ctx, choice)?;

            ctx.add_define_raw("USE_ESP_IDF_VERSION_CODE", version_code(&choice.version));
        }

        FrameworkKind::Arduino => {
            ctx.add_platformio_option("framework", "arduino");
            ctx.add_build_flag("-DUSE_ARDUINO");
            ctx.add_build_flag("-DUSE_ESP32_FRAMEWORK_ARDUINO");
            ctx.add_platformio_option(
                "platform_packages",
                vec![format!(
                    "platformio/framework-arduinoespressif32 @ {}",
                    choice.source
                )],
            );

            ctx.add_define_raw("USE_ARDUINO_VERSION_CODE", version_code(&choice.version));
        }

        FrameworkKind::ArduinoIdf => {
            // The resolved platform locator is deliberately overridden: only
            // this archive is validated against the option set below.
            ctx.add_platformio_option("platform", HYBRID_PLATFORM_ARCHIVE);
            ctx.add_platformio_option("framework", "arduino, espidf");
            ctx.add_build_flag("-DUSE_ARDUINO");
            ctx.add_build_flag("-DUSE_ARDUINO_IDF");
            ctx.add_build_flag("-DUSE_ESP32_FRAMEWORK_ARDUINO");
            ctx.add_build_flag("-Wno-nonnull-compare");
            ctx.add_build_flag("-Wno-misleading-indentation");
            ctx.add_platformio_option("lib_ldf_mode", "chain");

            idf_baseline(ctx)?;

            // Arduino-compat defaults the hybrid core expects
            ctx.add_sdkconfig_option("CONFIG_AUTOSTART_ARDUINO", true)?;
            ctx.add_sdkconfig_option("CONFIG_ARDUINO_VARIANT", "esp32")?;
            ctx.add_sdkconfig_option("CONFIG_ARDUHAL_ESP_LOG", true)?;
            ctx.add_sdkconfig_option("CONFIG_COMPILER_STACK_CHECK_MODE_NORM", true)?;
            ctx.add_sdkconfig_option("CONFIG_COMPILER_STACK_CHECK", true)?;
            ctx.add_sdkconfig_option("CONFIG_COMPILER_WARN_WRITE_STRINGS", true)?;
            ctx.add_sdkconfig_option("CONFIG_ESPTOOLPY_FLASHSIZE_4MB", true)?;
            ctx.add_sdkconfig_option("CONFIG_ESPTOOLPY_FLASHSIZE", "4MB")?;
            // DRAM the Arduino core reserves for the BT controller
            ctx.add_sdkconfig_option("CONFIG_BTDM_RESERVE_DRAM", SdkValue::raw("0xDB5C"))?;

            apply_user_options(ctx, choice)?;

            ctx.add_define_raw("USE_ESP_IDF_VERSION_CODE", version_code(&choice.version));
            ctx.add_define_raw("USE_ARDUINO_VERSION_CODE", version_code(&choice.version));
        }
    }

    Ok(())
}

/// Sdkconfig baseline shared by every sdkconfig-capable build.
fn idf_baseline(ctx: &mut BuildContext) -> Result<()> {
    ctx.add_sdkconfig_option("CONFIG_PARTITION_TABLE_SINGLE_APP", false)?;
    ctx.add_sdkconfig_option("CONFIG_PARTITION_TABLE_CUSTOM", true)?;
    ctx.add_sdkconfig_option("CONFIG_PARTITION_TABLE_CUSTOM_FILENAME", "partitions.csv")?;
    ctx.add_sdkconfig_option("CONFIG_COMPILER_OPTIMIZATION_DEFAULT", false)?;
    ctx.add_sdkconfig_option("CONFIG_COMPILER_OPTIMIZATION_SIZE", true)?;

    // 1 kHz tick so delay() has 1 ms resolution
    ctx.add_sdkconfig_option("CONFIG_FREERTOS_HZ", 1000)?;

    // task watchdog
    ctx.add_sdkconfig_option("CONFIG_ESP_TASK_WDT", true)?;
    ctx.add_sdkconfig_option("CONFIG_ESP_TASK_WDT_PANIC", true)?;
    ctx.add_sdkconfig_option("CONFIG_ESP_TASK_WDT_CHECK_IDLE_TASK_CPU0", false)?;
    ctx.add_sdkconfig_option("CONFIG_ESP_TASK_WDT_CHECK_IDLE_TASK_CPU1", false)?;
    Ok(())
}

/// User sdkconfig passthrough and advanced flags.
fn apply_user_options(ctx: &mut BuildContext, choice: &FrameworkChoice) -> Result<()> {
    for (name, value) in &choice.sdkconfig_options {
        ctx.add_sdkconfig_option(name.clone(), SdkValue::raw(value.clone()))?;
    }

    if choice.advanced.ignore_efuse_mac_crc {
        ctx.add_define("USE_ESP32_IGNORE_EFUSE_MAC_CRC");
        ctx.add_sdkconfig_option("CONFIG_ESP32_PHY_CALIBRATION_AND_DATA_STORAGE", false)?;
    }
    Ok(())
}

fn version_code(version: &Version) -> String {
    format!(
        "VERSION_CODE({}, {}, {})",
        version.major, version.minor, version.patch
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use espforge_framework::{AdvancedOptions, DeviceConfig, Diagnostics, FrameworkConfig};

    use crate::context::PioValue;
    use crate::sdkconfig::SdkValue;

    fn populated(framework: FrameworkConfig) -> BuildContext {
        let config = DeviceConfig {
            board: "esp32dev".to_string(),
            variant: None,
            framework,
        };
        let device = config.resolve(&mut Diagnostics::new()).unwrap();
        let mut ctx = BuildContext::new("test", &device);
        populate(&mut ctx, &device).unwrap();
        ctx
    }

    fn espidf_config() -> FrameworkConfig {
        FrameworkConfig::EspIdf {
            version: "recommended".to_string(),
            source: None,
            platform_version: None,
            sdkconfig_options: BTreeMap::new(),
            advanced: AdvancedOptions::default(),
        }
    }

    fn option<'c>(ctx: &'c BuildContext, key: &str) -> &'c PioValue {
        ctx.pio_options()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .unwrap()
    }

    #[test]
    fn common_options_and_flags() {
        let ctx = populated(FrameworkConfig::default());
        assert_eq!(option(&ctx, "board"), &PioValue::from("esp32dev"));
        assert_eq!(
            option(&ctx, "board_build.partitions"),
            &PioValue::from("partitions.csv")
        );
        assert!(ctx.build_flags().contains(&"-DUSE_ESP32".to_string()));
        assert!(ctx
            .build_flags()
            .contains(&"-DUSE_ESP32_VARIANT_ESP32".to_string()));
    }

    #[test]
    fn arduino_has_no_sdkconfig() {
        let ctx = populated(FrameworkConfig::default());
        assert_eq!(option(&ctx, "framework"), &PioValue::from("arduino"));
        assert!(ctx.sdkconfig().is_empty());
        assert_eq!(
            option(&ctx, "platform_packages"),
            &PioValue::List(vec![
                "platformio/framework-arduinoespressif32 @ ~3.10006.0".to_string()
            ])
        );
    }

    #[test]
    fn espidf_baseline_options() {
        let ctx = populated(espidf_config());
        assert_eq!(option(&ctx, "framework"), &PioValue::from("espidf"));
        assert_eq!(
            ctx.sdkconfig().get("CONFIG_PARTITION_TABLE_CUSTOM"),
            Some(&SdkValue::Bool(true))
        );
        assert_eq!(
            ctx.sdkconfig().get("CONFIG_FREERTOS_HZ"),
            Some(&SdkValue::Int(1000))
        );
        assert!(ctx
            .render_build_flags()
            .contains(&"-DUSE_ESP_IDF_VERSION_CODE=VERSION_CODE(4, 3, 2)".to_string()));
    }

    #[test]
    fn user_options_pass_through_raw() {
        let mut options = BTreeMap::new();
        options.insert("CONFIG_FREERTOS_UNICORE".to_string(), "y".to_string());
        let ctx = populated(FrameworkConfig::EspIdf {
            version: "recommended".to_string(),
            source: None,
            platform_version: None,
            sdkconfig_options: options,
            advanced: AdvancedOptions::default(),
        });
        assert_eq!(
            ctx.sdkconfig().get("CONFIG_FREERTOS_UNICORE"),
            Some(&SdkValue::Raw("y".to_string()))
        );
    }

    #[test]
    fn efuse_flag_adds_define_and_option() {
        let ctx = populated(FrameworkConfig::EspIdf {
            version: "recommended".to_string(),
            source: None,
            platform_version: None,
            sdkconfig_options: BTreeMap::new(),
            advanced: AdvancedOptions {
                ignore_efuse_mac_crc: true,
            },
        });
        assert!(ctx
            .render_build_flags()
            .contains(&"-DUSE_ESP32_IGNORE_EFUSE_MAC_CRC".to_string()));
        assert_eq!(
            ctx.sdkconfig()
                .get("CONFIG_ESP32_PHY_CALIBRATION_AND_DATA_STORAGE"),
            Some(&SdkValue::Bool(false))
        );
    }

    #[test]
    fn hybrid_overrides_platform_and_ldf_mode() {
        let ctx = populated(FrameworkConfig::ArduinoIdf {
            version: "recommended".to_string(),
            source: None,
            platform_version: None,
            sdkconfig_options: BTreeMap::new(),
            advanced: AdvancedOptions::default(),
        });
        assert_eq!(
            option(&ctx, "platform"),
            &PioValue::from(HYBRID_PLATFORM_ARCHIVE)
        );
        assert_eq!(option(&ctx, "framework"), &PioValue::from("arduino, espidf"));
        assert_eq!(option(&ctx, "lib_ldf_mode"), &PioValue::from("chain"));
        assert_eq!(
            ctx.sdkconfig().get("CONFIG_ESPTOOLPY_FLASHSIZE"),
            Some(&SdkValue::Str("4MB".to_string()))
        );
        assert_eq!(
            ctx.sdkconfig().get("CONFIG_BTDM_RESERVE_DRAM"),
            Some(&SdkValue::Raw("0xDB5C".to_string()))
        );
        // both runtime version codes are defined
        let flags = ctx.render_build_flags();
        assert!(flags.iter().any(|f| f.starts_with("-DUSE_ESP_IDF_VERSION_CODE=")));
        assert!(flags.iter().any(|f| f.starts_with("-DUSE_ARDUINO_VERSION_CODE=")));
    }
}
