//! CLI commands for the cobalt codec.

pub mod benchmark;
pub mod build;
pub mod decode;
pub mod encode;
pub mod lookup;

pub use benchmark::BenchmarkCommand;
pub use build::BuildCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use lookup::LookupCommand;

use anyhow::{Context, Result as AnyhowResult};
use cobalt_codec::{Codec, EmptyTokenPolicy, TableLoader};
use std::path::Path;

/// Codec over a table directory, or over the compiled-in table when no
/// directory is given.
pub fn open_codec(table: Option<&str>, preserve_spacing: bool) -> AnyhowResult<Codec> {
    let mut builder = Codec::builder();

    if let Some(dir) = table {
        let dictionary = TableLoader::load(Path::new(dir))
            .with_context(|| format!("loading word tables from {}", dir))?;
        builder = builder.dictionary(dictionary);
    }
    if preserve_spacing {
        builder = builder.empty_tokens(EmptyTokenPolicy::Preserve);
    }

    Ok(builder.build())
}

/// Read text from the argument, or from stdin when it is "-".
pub fn read_text(input: String) -> AnyhowResult<String> {
    if input != "-" {
        return Ok(input);
    }

    use std::io::Read;
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}
