//! Build command implementation.

use clap::Parser;

/// Build command arguments.
#[derive(Parser)]
pub struct BuildCommand {
    /// Newline-separated word list
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the table files
    #[arg(short, long)]
    pub output: String,

    /// Take only the first N words of the list
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Sort and deduplicate the list instead of requiring sorted input
    #[arg(short, long, default_value_t = false)]
    pub sort: bool,
}

use anyhow::Result as AnyhowResult;
use cobalt_codec::{TableLoader, TableSaver, WordListOptions};
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: BuildCommand) -> AnyhowResult<()> {
    println!("Building word tables...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    if let Some(limit) = cmd.limit {
        println!("  Limit: {}", limit);
    }
    println!();

    let start = Instant::now();
    let options = WordListOptions {
        limit: cmd.limit,
        sort: cmd.sort,
    };
    let dictionary = TableLoader::load_word_list(Path::new(&cmd.input), options)?;
    println!(
        "Read {} words ({} table bytes) in {:.2}s",
        dictionary.len(),
        dictionary.table().packed_len(),
        start.elapsed().as_secs_f64()
    );

    let start = Instant::now();
    TableSaver::new(&dictionary).save(Path::new(&cmd.output))?;
    println!(
        "Tables saved to {} in {:.2}s",
        cmd.output,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
