//! Encode command implementation.

use clap::{Parser, ValueEnum};

/// How the encoded stream is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Wire bytes as hex
    Hex,
    /// Wire layout as 16-bit values
    Units,
    /// One token per line
    Tokens,
}

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Table directory (compiled-in table if not specified)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Sentence to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Keep empty tokens so repeated spaces survive decoding
    #[arg(short, long, default_value_t = false)]
    pub preserve_spacing: bool,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    /// Write raw wire bytes to this file instead of printing
    #[arg(short, long)]
    pub output: Option<String>,
}

use super::{open_codec, read_text};
use anyhow::Result as AnyhowResult;
use cobalt_codec::Token;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let codec = open_codec(cmd.table.as_deref(), cmd.preserve_spacing)?;
    let sentence = read_text(cmd.input)?;

    let stream = codec.encode(&sentence)?;

    if let Some(path) = &cmd.output {
        std::fs::write(path, stream.to_bytes())?;
        println!(
            "Encoded {} bytes into {} ({} words, {} literals) at {}",
            sentence.len(),
            stream.encoded_len(),
            stream.word_count(),
            stream.literal_count(),
            path
        );
        return Ok(());
    }

    match cmd.format {
        OutputFormat::Hex => println!("{}", hex::encode(stream.to_bytes())),
        OutputFormat::Units => {
            let units: Vec<String> = stream.units().iter().map(|u| u.to_string()).collect();
            println!("{}", units.join(" "));
        }
        OutputFormat::Tokens => {
            for token in stream.tokens() {
                match token {
                    Token::Word(ordinal) => {
                        println!("{:>5}  {}", ordinal, codec.dictionary().word_at(*ordinal))
                    }
                    Token::Literal(text) => println!("  lit  {:?}", text.as_str()),
                    Token::EndOfStream => println!("  end"),
                }
            }
        }
    }

    Ok(())
}
