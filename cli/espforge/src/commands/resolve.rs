//! `espforge resolve` — validate a manifest and print the framework choice.

use std::path::Path;

use anyhow::{Context, Result};

use espforge_framework::Diagnostics;

use crate::manifest::DeviceManifest;

pub fn run(config: &Path, json: bool) -> Result<()> {
    let manifest = DeviceManifest::load(config)?;

    let mut diags = Diagnostics::new();
    let device = manifest
        .device_config()
        .resolve(&mut diags)
        .with_context(|| format!("validating {}", config.display()))?;

    for warning in diags.warnings() {
        eprintln!("warning: {warning}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&device)?);
        return Ok(());
    }

    println!("=== Framework Resolution ===");
    println!("Device:    {}", manifest.device.name);
    println!("Board:     {}", device.board);
    println!(
        "Variant:   {} ({})",
        device.variant,
        device.variant.friendly_name()
    );
    println!();
    println!("Framework: {} {}", device.choice.kind, device.choice.version);
    println!("Source:    {}", device.choice.source);
    println!("Platform:  {}", device.choice.platform);
    if !device.choice.sdkconfig_options.is_empty() {
        println!(
            "Sdkconfig passthrough: {} option(s)",
            device.choice.sdkconfig_options.len()
        );
    }

    Ok(())
}
