//! snapshot-link - encode, decode and inspect canvas share-link params.
//!
//! Usage:
//!   snapshot-link encode --seed abc --model local-sim < canvas.json
//!   snapshot-link decode <param>
//!   snapshot-link inspect <param>
//!
//! Set `RUST_LOG=debug` to see compression decisions and decode failures.

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use olumi_snapshot_share::{
    ShareCodecOptions, SharedParam, SnapshotShareCodec, SnapshotSharePayload,
    DEFAULT_COMPRESS_THRESHOLD_BYTES, DEFAULT_MAX_PARAM_LEN,
};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snapshot-link", about = "Encode and decode canvas share-link params")]
struct Cli {
    /// Deflate payloads whose JSON is longer than this many bytes
    #[arg(long, default_value_t = DEFAULT_COMPRESS_THRESHOLD_BYTES)]
    threshold: usize,
    /// Refuse params longer than this many characters
    #[arg(long, default_value_t = DEFAULT_MAX_PARAM_LEN)]
    max_len: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read canvas data JSON from stdin and print its share param
    Encode {
        #[arg(long, default_value = "")]
        seed: String,
        #[arg(long, default_value = "")]
        model: String,
    },
    /// Print the snapshot carried by a share param
    Decode { param: String },
    /// Describe a share param without printing its data
    Inspect { param: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let codec = SnapshotShareCodec::new(ShareCodecOptions {
        compress_threshold_bytes: cli.threshold,
        max_param_len: cli.max_len,
        ..ShareCodecOptions::default()
    });

    match cli.command {
        Command::Encode { seed, model } => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read canvas data from stdin")?;
            let data: Value = serde_json::from_str(&input).context("stdin is not valid JSON")?;
            let param = codec.encode(&SnapshotSharePayload::new(seed, model, data))?;
            info!(len = param.len(), "encoded share param");
            println!("{param}");
        }
        Command::Decode { param } => {
            let Some(payload) = codec.try_decode(param.trim()) else {
                bail!("not a valid shared snapshot");
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Inspect { param } => {
            let param = param.trim();
            let parsed = SharedParam::parse(param);
            let kind = if parsed.is_compressed() { "deflate" } else { "raw" };
            println!("encoding: {kind}");
            println!("length:   {} / {}", parsed.len(), codec.options().max_param_len);
            match codec.try_decode(param) {
                Some(payload) => {
                    println!("valid:    yes");
                    println!("seed:     {}", payload.seed);
                    println!("model:    {}", payload.model);
                    println!("json:     {} bytes", serde_json::to_vec(&payload)?.len());
                }
                None => println!("valid:    no"),
            }
        }
    }
    Ok(())
}
