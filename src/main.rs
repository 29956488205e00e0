//! greffe-index - Offline tooling entry point
//!
//! The binary carries the offline side of the pipeline: compressing the flat
//! greffe artifact, re-validating persisted artifacts, and one-shot lookups
//! for spot checks. The runtime lookup path lives in the library and needs
//! no binary.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process;

use greffe_index::index::{compress_greffe_data, find_greffe, validate_compression};
use greffe_index::store::{read_compressed_index, read_postal_code_map, write_compressed_index};

#[derive(Parser)]
#[command(name = "greffe-index")]
#[command(about = "Compressed postal-code to greffe index tooling")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a flat greffe artifact into the ranges+singles form
    Compress {
        /// Flat artifact to read (byCodePostal map or bare code->greffe map)
        #[arg(short, long)]
        input: PathBuf,

        /// Compressed artifact to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Re-validate a compressed artifact against its flat source
    Validate {
        /// Flat artifact the compressed one was built from
        #[arg(short, long)]
        input: PathBuf,

        /// Compressed artifact to check
        #[arg(short, long)]
        compressed: PathBuf,
    },

    /// Resolve one postal code against a compressed artifact
    Lookup {
        /// 5-digit postal code
        code: String,

        /// Compressed artifact to query
        #[arg(short, long)]
        index: PathBuf,
    },
}

fn run_compress(input: &PathBuf, output: &PathBuf) -> anyhow::Result<()> {
    let map = read_postal_code_map(input)
        .with_context(|| format!("reading flat artifact {}", input.display()))?;
    let input_bytes = fs::metadata(input)?.len();
    println!("Original entries: {}", map.len());

    let compressed = compress_greffe_data(&map);
    println!("Ranges:           {}", compressed.ranges.len());
    println!("Singles:          {}", compressed.singles.len());
    println!(
        "Entry reduction:  {} -> {} ({}%)",
        compressed.metadata.original_size,
        compressed.metadata.compressed_size,
        compressed.metadata.compression_ratio
    );

    // A lossy artifact must never be published.
    let report = validate_compression(&map, &compressed);
    if !report.valid {
        eprintln!("Validation failed:");
        for error in &report.errors {
            eprintln!("  - {}", error);
        }
        bail!("refusing to write a lossy artifact");
    }
    println!("Validation:       all {} lookups match", map.len());

    write_compressed_index(output, &compressed)
        .with_context(|| format!("writing compressed artifact {}", output.display()))?;

    let output_bytes = fs::metadata(output)?.len();
    let file_reduction = if input_bytes > 0 {
        input_bytes.saturating_sub(output_bytes) as f64 / input_bytes as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "File size:        {:.1} KB -> {:.1} KB ({:.1}% reduction)",
        input_bytes as f64 / 1024.0,
        output_bytes as f64 / 1024.0,
        file_reduction
    );
    println!("Wrote {}", output.display());

    Ok(())
}

fn run_validate(input: &PathBuf, compressed: &PathBuf) -> anyhow::Result<()> {
    let map = read_postal_code_map(input)
        .with_context(|| format!("reading flat artifact {}", input.display()))?;
    let index = read_compressed_index(compressed)
        .with_context(|| format!("reading compressed artifact {}", compressed.display()))?;

    let report = validate_compression(&map, &index);
    if report.valid {
        println!("Valid: all {} entries decode correctly", map.len());
        return Ok(());
    }

    eprintln!("Invalid: {} error(s)", report.errors.len());
    for error in &report.errors {
        eprintln!("  - {}", error);
    }
    report
        .into_result()
        .context("compressed artifact does not match its source")
}

fn run_lookup(code: &str, index_path: &PathBuf) -> anyhow::Result<()> {
    let index = read_compressed_index(index_path)
        .with_context(|| format!("reading compressed artifact {}", index_path.display()))?;

    match find_greffe(code, &index) {
        Some(greffe) => {
            println!("{}: {}", code, greffe);
            Ok(())
        }
        None => {
            println!("{}: not found", code);
            process::exit(1);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Compress { input, output } => run_compress(input, output),
        Command::Validate { input, compressed } => run_validate(input, compressed),
        Command::Lookup { code, index } => run_lookup(code, index),
    }
}
