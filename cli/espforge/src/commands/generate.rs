//! `espforge generate` — resolve a manifest and emit build artifacts.

use std::path::Path;

use anyhow::{Context, Result};

use espforge_build::BuildContext;
use espforge_framework::Diagnostics;

use crate::manifest::DeviceManifest;

pub fn run(config: &Path, build_dir: &Path) -> Result<()> {
    let manifest = DeviceManifest::load(config)?;

    let mut diags = Diagnostics::new();
    let device = manifest
        .device_config()
        .resolve(&mut diags)
        .with_context(|| format!("validating {}", config.display()))?;

    for warning in diags.warnings() {
        eprintln!("warning: {warning}");
    }

    let mut ctx = BuildContext::new(&manifest.device.name, &device);
    espforge_build::populate(&mut ctx, &device)?;
    let report = espforge_build::emit(&ctx, build_dir)?;

    println!(
        "Build artifacts for '{}' in {}:",
        manifest.device.name,
        build_dir.display()
    );
    print!("{report}");

    Ok(())
}
