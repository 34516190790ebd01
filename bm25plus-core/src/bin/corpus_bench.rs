//! Corpus Benchmarking Tool
//!
//! Measures tokenization and indexing throughput on a text file with one
//! document per line, then ranks the corpus for the terms given on the
//! command line.
//!
//! ## Usage
//!
//! ```bash
//! # Index only
//! ./target/release/corpus_bench /path/to/corpus.txt
//!
//! # Index, then run a multi-term query and print the top hits
//! ./target/release/corpus_bench /path/to/corpus.txt linked list complexity
//!
//! # Log indexing decisions
//! RUST_LOG=bm25plus_core=debug ./target/release/corpus_bench corpus.txt rust
//! ```
//!
//! Build with `cargo build --release --features bench`.
//!
//! Line `n` (1-based) becomes document id `n`. Empty lines are indexed as
//! zero-length documents.
//!
//! ## Example Output
//!
//! ```text
//! === Index ===
//! --------------------------------
//! Elapsed     : 0.452 s (mean of 5 runs)
//! Throughput  : 184.3 MiB/s
//! Documents   : 1_000_000 (2_212_389/s)
//! --------------------------------
//! ```

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use bm25plus_core::analyzer::tokenizer::Tokenizer;
use bm25plus_core::{Bm25Plus, DocId, Document};
use log::info;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;
const TOP_HITS: usize = 10;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [term...]");
        std::process::exit(1);
    }

    let path = &args[1];
    let terms = &args[2..];

    println!("Loading file...");
    let input = fs::read_to_string(path)?;
    let lines: Vec<&str> = input.lines().collect();

    println!("File size: {} bytes", fmt_count(input.len() as u64));
    println!("Documents: {}\n", fmt_count(lines.len() as u64));

    bench_tokenize(&input, &lines);
    let engine = bench_index(&input, &lines);

    println!("Index     : {}\n", engine.stats());

    if !terms.is_empty() {
        run_query(&engine, terms);
    }

    Ok(())
}

fn documents<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = Document> + 'a {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| Document::new(i as DocId + 1, *line))
}

fn bench_tokenize(input: &str, lines: &[&str]) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        for line in lines {
            tokenizer.tokenize(line, |_t| local += 1);
        }
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf(input.len(), elapsed, "Tokens", tokens);
}

fn bench_index(input: &str, lines: &[&str]) -> Bm25Plus {
    println!("=== Index ===");

    let elapsed = measure(|| {
        let mut engine = Bm25Plus::new();
        engine.index_all(documents(lines));
        std::hint::black_box(engine.len());
    });

    let mut engine = Bm25Plus::new();
    let added = engine.index_all(documents(lines));
    info!("indexed {} documents from {} lines", added, lines.len());

    print_perf(input.len(), elapsed, "Documents", added as u64);
    engine
}

fn run_query(engine: &Bm25Plus, terms: &[String]) {
    println!("=== Query {:?} ===", terms);

    let start = Instant::now();
    let results = engine.terms_query(terms);
    let elapsed = start.elapsed();

    println!("--------------------------------");
    println!("Elapsed     : {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    println!("Hits        : {}", fmt_count(results.len() as u64));
    for hit in results.iter().take(TOP_HITS) {
        println!("{:>10.6}  #{:<8} {}", hit.score, hit.document.id, preview(&hit.document.text));
    }
    println!("--------------------------------\n");
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 60;
    if text.chars().count() <= MAX_CHARS {
        return text.to_string();
    }
    let mut out: String = text.chars().take(MAX_CHARS).collect();
    out.push_str("...");
    out
}

/// Runs `f` once untimed, then returns the mean of the timed runs.
fn measure<F: FnMut()>(mut f: F) -> Duration {
    for _ in 0..WARMUP_RUNS {
        f();
    }

    let start = Instant::now();
    for _ in 0..MEASURE_RUNS {
        f();
    }
    start.elapsed() / MEASURE_RUNS as u32
}

fn print_perf(input_bytes: usize, elapsed: Duration, unit: &str, count: u64) {
    let secs = elapsed.as_secs_f64();
    let mib_per_sec = input_bytes as f64 / (1024.0 * 1024.0) / secs;

    println!("--------------------------------");
    println!("Elapsed     : {:.3} s (mean of {} runs)", secs, MEASURE_RUNS);
    println!("Throughput  : {:.1} MiB/s", mib_per_sec);
    println!(
        "{:<12}: {} ({}/s)",
        unit,
        fmt_count(count),
        fmt_count((count as f64 / secs) as u64)
    );
    println!("--------------------------------\n");
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
