use std::fmt;
use std::path::PathBuf;

use bio::bio_types::strand::Strand;
use thiserror::Error;

/// A predicted gene in 1-based inclusive coordinates.
///
/// `start` is the first base of the start codon and `end` the last base of
/// the stop codon, so `end - start + 1` is always a multiple of three.
///
/// # Examples
///
/// ```rust
/// use gpred_core::types::GeneInterval;
///
/// let gene = GeneInterval::new(17, 28);
/// assert_eq!(gene.len(), 12);
/// assert_eq!(gene.to_forward(64), GeneInterval::new(37, 48));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeneInterval {
    /// First base of the start codon (1-based)
    pub start: usize,
    /// Last base of the stop codon (1-based, inclusive)
    pub end: usize,
}

impl GeneInterval {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the gene in base pairs, stop codon included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Reflects an interval found on the reverse complement of a sequence of
    /// `sequence_length` bases into forward-strand numbering.
    ///
    /// Endpoints swap and each is mirrored through `sequence_length + 1`.
    /// Applying the transform twice returns the original interval.
    #[must_use]
    pub const fn to_forward(&self, sequence_length: usize) -> Self {
        Self {
            start: sequence_length + 1 - self.end,
            end: sequence_length + 1 - self.start,
        }
    }

    /// Zero-based half-open range covering the gene.
    #[must_use]
    pub const fn as_range(&self) -> std::ops::Range<usize> {
        (self.start - 1)..self.end
    }
}

impl fmt::Display for GeneInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A gene interval tagged with the strand it was predicted on.
///
/// Coordinates are always forward-strand numbering, whatever the strand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gene {
    pub interval: GeneInterval,
    pub strand: Strand,
}

/// Error types that can occur during gene prediction
#[derive(Error, Debug)]
pub enum GpredError {
    /// Sequence holds a symbol outside A, C, G, T
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    /// Nucleotide pattern could not be compiled
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Tabular output could not be serialized
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// An output destination could not be created or written
    #[error("Error cannot open {}: {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Rayon thread pool could not be built
    #[error("Failed to configure thread pool: {0}")]
    ThreadPool(String),
}
