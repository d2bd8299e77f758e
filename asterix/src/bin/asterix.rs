//! CLI entry point (C11): decodes an ASTERIX datagram file and prints JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use asterix_io::{decode_stream, project_to_json, read_datagram, to_json};
use asterix_uap::UapRegistry;

#[derive(Parser, Debug)]
#[command(name = "asterix", about = "Decode ASTERIX surveillance message datagrams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a datagram file and print it as JSON.
    Decode {
        /// Path to the binary datagram file.
        file: PathBuf,

        /// Which JSON rendering to print.
        #[arg(long, value_enum, default_value_t = OutputFormat::CategoryJson)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Category-specific semantic model (falls back to raw for unregistered categories).
    CategoryJson,
    /// The raw, structurally faithful item tree.
    RawJson,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Decode { file, format } => run_decode(&file, format),
    }
}

fn run_decode(file: &PathBuf, format: OutputFormat) -> Result<()> {
    let bytes = read_datagram(file).with_context(|| format!("reading {}", file.display()))?;
    let registry = UapRegistry::with_defaults();
    let blocks = decode_stream(&bytes, &registry).with_context(|| format!("decoding {}", file.display()))?;

    log::info!("decoded {} datablock(s) from {}", blocks.len(), file.display());

    for block in &blocks {
        match format {
            OutputFormat::RawJson => {
                println!("{}", serde_json::to_string_pretty(&to_json(block))?);
            }
            OutputFormat::CategoryJson => {
                for record in &block.records {
                    let value = project_to_json(record)?;
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }
    }

    Ok(())
}
