//! # gpred - Heuristic Prokaryotic Gene Prediction
//!
//! Predicts probable protein-coding genes in a DNA sequence from three simple
//! signals: a start codon paired with the first in-frame stop codon, a minimum
//! coding length, and a Shine-Dalgarno ribosome binding motif a few bases
//! upstream of the start.
//!
//! Both strands are scanned. Genes found on the reverse complement are
//! reported in forward-strand coordinates.
//!
//! ## Quick Start
//!
//! ```rust
//! use gpred_core::{GpredAnalyzer, config::GpredConfig};
//!
//! let config = GpredConfig {
//!     min_gene_len: 9,
//!     min_gap: 1,
//!     ..Default::default()
//! };
//! let analyzer = GpredAnalyzer::new(config)?;
//!
//! let results = analyzer.analyze_sequence("AGGAGGCCCCCCCCCCATGAAACGTTAGCCCC", None)?;
//! assert_eq!(results.forward_genes.len(), 1);
//! # Ok::<(), gpred_core::types::GpredError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for analysis
//! - [`engine`]: Two-strand analysis driver
//! - [`algorithms`]: Codon search, Shine-Dalgarno check and the gene scanner
//! - [`pattern`]: Nucleotide pattern matching
//! - [`sequence`]: Reverse complement and FASTA input
//! - [`output`]: Positions table and gene FASTA writers
//! - [`results`]: Prediction results
//! - [`types`]: Gene intervals and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, GpredError>`](types::GpredError),
//! covering:
//!
//! - Symbols outside A, C, G, T
//! - I/O errors while reading input or writing output
//! - Invalid configuration

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod pattern;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::GpredAnalyzer;
pub use types::GpredError;
