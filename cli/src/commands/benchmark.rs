//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Table directory (compiled-in table if not specified)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Path to input text file, one sentence per line
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,
}

use super::open_codec;
use anyhow::Result as AnyhowResult;
use std::fs;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    let codec = open_codec(cmd.table.as_deref(), false)?;

    let text = fs::read_to_string(&cmd.input)?;
    let sentences: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let iterations = cmd.iterations.max(1);

    println!("Benchmarking encoding...");
    println!("  Sentences: {}", sentences.len());
    println!("  Text length: {} bytes", text.len());
    println!("  Iterations: {}", iterations);
    println!();

    // Warmup, and the numbers for the compression ratio
    let streams = codec.encode_batch(&sentences)?;
    let input_bytes: usize = sentences.iter().map(|s| s.len()).sum();
    let encoded_bytes: usize = streams.iter().map(|s| s.encoded_len()).sum();
    let words: usize = streams.iter().map(|s| s.word_count()).sum();
    let literals: usize = streams.iter().map(|s| s.literal_count()).sum();

    let start = Instant::now();
    for _ in 0..iterations {
        for sentence in &sentences {
            let _ = codec.encode(sentence)?;
        }
    }
    let elapsed = start.elapsed();

    let per_iteration = elapsed.as_secs_f64() / iterations as f64;
    let throughput = input_bytes as f64 / per_iteration / (1024.0 * 1024.0);

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", per_iteration * 1000.0);
    println!("  Throughput: {:.1} MiB/s", throughput);
    println!(
        "  Dictionary hits: {} of {} words",
        words,
        words + literals
    );
    if encoded_bytes > 0 {
        println!(
            "  Size: {} -> {} bytes ({:.1}%)",
            input_bytes,
            encoded_bytes,
            encoded_bytes as f64 * 100.0 / input_bytes.max(1) as f64
        );
    }

    Ok(())
}
