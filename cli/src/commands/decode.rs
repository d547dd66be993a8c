//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Table directory (compiled-in table if not specified)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Encoded stream as hex
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    pub hex: Option<String>,

    /// File holding raw wire bytes
    #[arg(short, long)]
    pub input: Option<String>,
}

use super::open_codec;
use anyhow::{Context, Result as AnyhowResult};

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let codec = open_codec(cmd.table.as_deref(), false)?;

    let bytes = match (&cmd.hex, &cmd.input) {
        (Some(text), _) => hex::decode(text.trim()).context("parsing hex input")?,
        (None, Some(path)) => std::fs::read(path).with_context(|| format!("reading {}", path))?,
        (None, None) => anyhow::bail!("either --hex or --input is required"),
    };

    let text = codec.decode_bytes(&bytes)?;
    println!("{}", text);

    Ok(())
}
