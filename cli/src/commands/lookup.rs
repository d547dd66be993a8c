//! Lookup command implementation.

use clap::Parser;

/// Lookup command arguments.
#[derive(Parser)]
pub struct LookupCommand {
    /// Table directory (compiled-in table if not specified)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Words to look up
    #[arg(required = true)]
    pub words: Vec<String>,
}

use super::open_codec;
use anyhow::Result as AnyhowResult;
use cobalt_codec::CodecError;

pub fn run(cmd: LookupCommand) -> AnyhowResult<()> {
    let codec = open_codec(cmd.table.as_deref(), false)?;

    for word in &cmd.words {
        match codec.find_word(word) {
            Ok(ordinal) => println!("{}\t{}", word, ordinal),
            Err(CodecError::WordNotFound(_)) => println!("{}\tnot found", word),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
