//! Binary entry point for the `zyphrax` command-line tool.
//!
//! One-shot file compression/decompression:
//!
//! ```text
//! zyphrax [-l LEVEL] [-B BYTES] [-C] <input> <output>
//! zyphrax -d <input> <output>
//! ```
//!
//! All heap allocations are released by Rust's RAII; errors propagate as
//! `anyhow` results with file-path context.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use zyphrax::frame::{compress_frame_to_vec, decompress_frame_to_vec};
use zyphrax::{ZyphraxParams, BLOCK_SIZE_DEFAULT, LEVEL_DEFAULT};

#[derive(Parser)]
#[command(name = "zyphrax", version, about = "Zyphrax block codec")]
struct Args {
    /// Decompress instead of compress.
    #[arg(short = 'd', long)]
    decompress: bool,

    /// Compression level (1-9).
    #[arg(short = 'l', long, default_value_t = LEVEL_DEFAULT)]
    level: u32,

    /// Block size in bytes.
    #[arg(short = 'B', long = "block-size", default_value_t = BLOCK_SIZE_DEFAULT)]
    block_size: u32,

    /// Embed and verify an XXH32 content checksum.
    #[arg(short = 'C', long)]
    checksum: bool,

    /// Input file.
    input: PathBuf,

    /// Output file.
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let input = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let start = Instant::now();
    let output = if args.decompress {
        let decoded = decompress_frame_to_vec(&input)
            .with_context(|| format!("decompressing {}", args.input.display()))?;
        println!("Decompressed {} -> {} bytes", input.len(), decoded.len());
        decoded
    } else {
        let params = ZyphraxParams {
            level: args.level,
            block_size: args.block_size,
            checksum: u32::from(args.checksum),
        };
        let encoded = compress_frame_to_vec(&input, &params)
            .with_context(|| format!("compressing {}", args.input.display()))?;
        if input.is_empty() {
            println!("Compressed 0 -> {} bytes (header only)", encoded.len());
        } else {
            let ratio = encoded.len() as f64 * 100.0 / input.len() as f64;
            println!(
                "Compressed {} -> {} bytes ({ratio:.2}%)",
                input.len(),
                encoded.len()
            );
        }
        encoded
    };
    let elapsed = start.elapsed();

    fs::write(&args.output, &output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("Time: {:.3}s", elapsed.as_secs_f64());
    Ok(())
}
