//! msgbridge CLI - Codec generator for message and service schemas
//!
//! Commands:
//! - `msgbridge generate` - Generate Rust units or package indexes
//! - `msgbridge check` - Resolve schema files without writing
//! - `msgbridge inspect` - Decode a binary payload and print it as JSON

use anyhow::Context;
use clap::{Parser, Subcommand};
use msgbridge_cli::generate::GenerateOptions;
use msgbridge_cli::{check, generate, inspect, logging};
use msgbridge_core::{GeneratorConfig, LogLevel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "msgbridge")]
#[command(author, version, about = "Codec generator for message schemas", long_about = None)]
struct Cli {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Path to msgbridge.toml (default: ./msgbridge.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust code from schema documents
    Generate {
        /// Schema documents to generate
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Root of the generated tree (default: <pkg_dir>/src)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Write the package index instead of units
        #[arg(long)]
        generate_root: bool,

        /// Extra documents to resolve against
        #[arg(short, long)]
        registry: Vec<PathBuf>,
    },

    /// Resolve schema documents without writing anything
    Check {
        /// Schema documents to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Extra documents to resolve against
        #[arg(short, long)]
        registry: Vec<PathBuf>,
    },

    /// Decode a binary payload and print it as JSON
    Inspect {
        /// Fully-qualified message type, e.g. geometry_msgs/Point
        #[arg(short, long = "type")]
        type_name: String,

        /// Payload file, or - for standard input
        #[arg(short, long)]
        input: PathBuf,

        /// Schema documents defining the type and its dependencies
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut config = GeneratorConfig::discover(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    logging::init(config.log_level);

    match cli.command {
        Commands::Generate {
            files,
            output_dir,
            generate_root,
            registry,
        } => {
            if output_dir.is_some() {
                config.output_dir = output_dir;
            }
            let options = GenerateOptions {
                files,
                registry_files: registry,
                generate_root,
            };
            generate::run(&options, &config)?;
        }
        Commands::Check { files, registry } => {
            check::run(&files, &registry, &config)?;
        }
        Commands::Inspect {
            type_name,
            input,
            files,
        } => {
            inspect::run(&type_name, &input, &files, &config)?;
        }
    }

    Ok(())
}
