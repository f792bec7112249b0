//! The huffpack command-line wrapper: reads one whole input file, runs the
//! core encode or decode transform, writes the whole output file, and reports
//! sizes and compression ratio. All real work happens in the library; this
//! binary is glue and exit-code translation.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use huffpack::HuffpackError;

#[derive(Parser)]
#[command(name = "huffpack", version, about = "Lossless Huffman file compressor")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON stats instead of the human summary.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a file into a huffpack artifact.
    Encode {
        /// Path of the file to compress.
        input: PathBuf,
        /// Path the artifact is written to.
        output: PathBuf,
    },
    /// Recover the original file from a huffpack artifact.
    Decode {
        /// Path of the artifact to decode.
        input: PathBuf,
        /// Path the recovered bytes are written to.
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), HuffpackError> {
    match cli.command {
        Command::Encode { input, output } => {
            let data = fs::read(&input)?;
            let artifact = huffpack::encode(&data)?;
            fs::write(&output, &artifact)?;
            report_encode(&data, &artifact, cli.json)
        }
        Command::Decode { input, output } => {
            let artifact = fs::read(&input)?;
            let decoded = huffpack::decode(&artifact)?;
            fs::write(&output, &decoded)?;
            if !cli.json {
                println!("Artifact size:  {} bytes", artifact.len());
                println!("Recovered size: {} bytes", decoded.len());
            }
            Ok(())
        }
    }
}

fn report_encode(data: &[u8], artifact: &[u8], json: bool) -> Result<(), HuffpackError> {
    if json {
        let stats = huffpack::analyze(artifact)?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Original size:   {} bytes", data.len());
    println!("Compressed size: {} bytes", artifact.len());
    if !data.is_empty() {
        let ratio = artifact.len() as f64 / data.len() as f64 * 100.0;
        let rendered = format!("{:.2}%", ratio);
        let rendered = if ratio < 100.0 {
            rendered.green()
        } else {
            // Tiny or high-entropy inputs can grow: the tree header dominates.
            rendered.yellow()
        };
        println!("Compression rate: {}", rendered);
    }
    Ok(())
}
