//! # gpred CLI - Command-Line Gene Predictor
//!
//! A command-line interface for the gpred heuristic gene predictor.
//!
//! ## Usage
//!
//! ```bash
//! # Basic gene prediction
//! gpred -i genome.fasta
//!
//! # Custom outputs
//! gpred -i genome.fasta -p positions.csv -o genes.fna
//!
//! # Shorter genes packed more closely
//! gpred -i genome.fasta -g 30 -d 20
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Complete genome file in FASTA format
//! - `-g, --min-gene-len <N>`: Minimum gene length (default: 50)
//! - `-s, --max-shine-dalgarno-distance <N>`: Upstream Shine-Dalgarno search distance (default: 16)
//! - `-d, --min-gap <N>`: Minimum gap between two genes (default: 40)
//! - `-p, --positions <FILE>`: Forward-strand gene positions (default: predict_genes.csv)
//! - `-o, --output <FILE>`: Gene sequences in FASTA format (default: genes.fna)
//! - `-r, --reverse-positions <FILE>`: Reverse-strand gene positions (optional)
//! - `-j, --threads <N>`: Threads for the strand scans
//! - `-q, --quiet`: Suppress progress messages
//!
//! Log verbosity can be overridden with `RUST_LOG`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use gpred_core::config::GpredConfig;
use gpred_core::constants::{
    DEFAULT_GENES_FILE, DEFAULT_MAX_SHINE_DALGARNO_DISTANCE, DEFAULT_MIN_GAP,
    DEFAULT_MIN_GENE_LEN, DEFAULT_POSITIONS_FILE,
};
use gpred_core::output::{write_genes_file, write_positions_file};
use gpred_core::*;
use log::info;

/// Accepts only paths to existing regular files.
fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        return Ok(path);
    }
    let name = path
        .file_name()
        .map_or_else(|| value.to_string(), |n| n.to_string_lossy().into_owned());
    if path.is_dir() {
        Err(format!("{name} is a directory."))
    } else {
        Err(format!("{name} does not exist."))
    }
}

fn cli() -> Command {
    Command::new("gpred")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic prokaryotic gene prediction")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .value_parser(existing_file)
                .help("Complete genome file in fasta format"),
        )
        .arg(
            Arg::new("min-gene-len")
                .short('g')
                .long("min-gene-len")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("50")
                .help("Minimum gene length to consider"),
        )
        .arg(
            Arg::new("max-shine-dalgarno-distance")
                .short('s')
                .long("max-shine-dalgarno-distance")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("16")
                .help("Maximum distance from start codon where to look for a Shine-Dalgarno motif"),
        )
        .arg(
            Arg::new("min-gap")
                .short('d')
                .long("min-gap")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("40")
                .help("Minimum gap between two genes - shine box not included"),
        )
        .arg(
            Arg::new("positions")
                .short('p')
                .long("positions")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_POSITIONS_FILE)
                .help("Tabular file giving position of predicted genes"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_GENES_FILE)
                .help("Fasta file giving sequence of predicted genes"),
        )
        .arg(
            Arg::new("reverse-positions")
                .short('r')
                .long("reverse-positions")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Tabular file giving position of reverse-strand genes"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of threads for the strand scans"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
}

/// Main entry point for the gpred CLI application.
///
/// Failures are reported on stderr with a non-zero exit status.
fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Parses command-line arguments, predicts genes on both strands and writes
/// the positions table and gene sequences.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let quiet = matches.get_flag("quiet");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if quiet { "warn" } else { "info" }),
    )
    .init();

    // Parse options
    let options = GpredConfig {
        min_gene_len: matches
            .get_one::<usize>("min-gene-len")
            .copied()
            .unwrap_or(DEFAULT_MIN_GENE_LEN),
        max_shine_dalgarno_distance: matches
            .get_one::<usize>("max-shine-dalgarno-distance")
            .copied()
            .unwrap_or(DEFAULT_MAX_SHINE_DALGARNO_DISTANCE),
        min_gap: matches
            .get_one::<usize>("min-gap")
            .copied()
            .unwrap_or(DEFAULT_MIN_GAP),
        num_threads: matches.get_one::<usize>("threads").copied(),
        quiet,
        ..Default::default()
    };

    let input = matches
        .get_one::<PathBuf>("input")
        .ok_or("Missing input file")?;
    let positions = matches
        .get_one::<PathBuf>("positions")
        .ok_or("Missing positions file")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .ok_or("Missing output file")?;

    let analyzer = GpredAnalyzer::new(options)?;
    let results = analyzer.analyze_fasta_file(input)?;

    write_positions_file(positions, &results.forward_genes)?;
    if let Some(reverse_positions) = matches.get_one::<PathBuf>("reverse-positions") {
        write_positions_file(reverse_positions, &results.reverse_genes)?;
    }
    write_genes_file(output, &results, analyzer.config.line_width)?;

    info!(
        "Analysis complete! Found {} genes ({} forward, {} reverse) in {} bp.",
        results.sequence_info.num_genes,
        results.forward_genes.len(),
        results.reverse_genes.len(),
        results.sequence_info.length
    );

    Ok(())
}
