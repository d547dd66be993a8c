//! Cobalt CLI - Command-line interface for the cobalt codec.
//!
//! This is the main entry point for the `cobalt` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, BuildCommand, DecodeCommand, EncodeCommand, LookupCommand};

#[derive(Parser)]
#[command(name = "cobalt")]
#[command(about = "Compress English sentences with a word lookup table", long_about = None)]
#[command(version)]
struct Cli {
    /// Show info-level logs (or honour RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all logs
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build table files from a newline-separated word list
    Build(BuildCommand),
    /// Encode a sentence
    Encode(EncodeCommand),
    /// Decode an encoded sentence
    Decode(DecodeCommand),
    /// Look up the ordinals of words
    Lookup(LookupCommand),
    /// Benchmark encoding performance
    Benchmark(BenchmarkCommand),
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.command {
        Commands::Build(cmd) => commands::build::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Lookup(cmd) => commands::lookup::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
