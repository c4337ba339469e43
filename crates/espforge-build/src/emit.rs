//! Artifact emission.
//!
//! Flushes a populated context to the build directory in one sequential
//! pass: partition table, sdkconfig pair, version marker, build options.
//! Every write goes through the change detector, so re-emitting an unchanged
//! configuration reports every artifact as unchanged.

use std::fmt;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::context::{BuildContext, PioValue};
use crate::error::Result;
use crate::fsutil::write_file_if_changed;
use crate::partitions;
use crate::sdkconfig;

/// Version marker content; the SDK build scripts fail on some setups when
/// the build directory is neither a git checkout nor carries a version.txt.
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One emitted artifact.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    /// Whether the file was actually (re)written.
    pub written: bool,
}

/// Summary of one emission pass.
#[derive(Debug, Clone, Default)]
pub struct EmitReport {
    pub artifacts: Vec<Artifact>,
}

impl EmitReport {
    fn record(&mut self, path: PathBuf, written: bool) {
        self.artifacts.push(Artifact { path, written });
    }

    /// Whether any artifact was rewritten.
    pub fn any_written(&self) -> bool {
        self.artifacts.iter().any(|a| a.written)
    }
}

impl fmt::Display for EmitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for artifact in &self.artifacts {
            writeln!(
                f,
                "  {:<9} {}",
                if artifact.written { "written" } else { "unchanged" },
                artifact.path.display()
            )?;
        }
        Ok(())
    }
}

/// Emit all build artifacts for a populated context.
pub fn emit(ctx: &BuildContext, build_dir: &Path) -> Result<EmitReport> {
    let mut report = EmitReport::default();

    let partitions_path = build_dir.join("partitions.csv");
    let written = write_file_if_changed(&partitions_path, partitions::select(ctx.kind()))?;
    report.record(partitions_path, written);

    if ctx.kind().supports_sdkconfig() {
        let written = ctx.sdkconfig().write(build_dir, ctx.name())?;
        report.record(sdkconfig::authoritative_path(build_dir, ctx.name()), written);

        let version_path = build_dir.join("version.txt");
        let written = write_file_if_changed(&version_path, TOOL_VERSION)?;
        report.record(version_path, written);
    }

    let options_path = build_dir.join("build_options.ini");
    let written = write_file_if_changed(&options_path, &render_build_options(ctx))?;
    report.record(options_path, written);

    Ok(report)
}

/// Render the PlatformIO env section for a context.
///
/// Options come out sorted by key; build flags keep their insertion order.
pub fn render_build_options(ctx: &BuildContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[env:{}]", ctx.name());

    for (key, value) in ctx.pio_options() {
        match value {
            PioValue::Str(s) => {
                let _ = writeln!(out, "{key} = {s}");
            }
            PioValue::List(items) => {
                let _ = writeln!(out, "{key} =");
                for item in items {
                    let _ = writeln!(out, "    {item}");
                }
            }
        }
    }

    let flags = ctx.render_build_flags();
    if !flags.is_empty() {
        let _ = writeln!(out, "build_flags =");
        for flag in flags {
            let _ = writeln!(out, "    {flag}");
        }
    }

    out
}
