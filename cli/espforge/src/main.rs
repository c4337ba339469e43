//! espforge CLI — resolve device manifests and generate PlatformIO build inputs.

mod commands;
mod manifest;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "espforge", version, about = "ESP32 build configuration generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a device manifest and print the resolved framework choice
    Resolve {
        /// Device manifest (espforge.toml)
        #[arg(long)]
        config: PathBuf,
        /// Emit the resolution as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Resolve a manifest and emit the build artifacts
    Generate {
        /// Device manifest (espforge.toml)
        #[arg(long)]
        config: PathBuf,
        /// Output directory for the generated artifacts
        #[arg(long)]
        build_dir: PathBuf,
    },
    /// List known boards and their chip variants
    Boards {
        /// Restrict the listing to one variant (e.g. ESP32S3)
        #[arg(long)]
        variant: Option<String>,
    },
    /// List supported chip variants
    Variants,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Resolve { config, json } => commands::resolve::run(&config, json),
        Commands::Generate { config, build_dir } => commands::generate::run(&config, &build_dir),
        Commands::Boards { variant } => commands::boards::list(variant.as_deref()),
        Commands::Variants => commands::boards::variants(),
    }
}
