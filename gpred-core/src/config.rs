use crate::constants::{
    DEFAULT_MAX_SHINE_DALGARNO_DISTANCE, DEFAULT_MIN_GAP, DEFAULT_MIN_GENE_LEN, FASTA_LINE_WIDTH,
};
use crate::types::GpredError;

/// Output format options for gene prediction results.
///
/// # Examples
///
/// ```rust
/// use gpred_core::config::OutputFormat;
///
/// let format = OutputFormat::Positions;
/// assert_ne!(format, OutputFormat::Fasta);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated `Start,Stop` table of forward-strand genes.
    Positions,

    /// FASTA records `gene_<n>` holding each gene's nucleotide sequence,
    /// forward-strand genes first.
    Fasta,
}

/// Configuration settings for gene prediction.
///
/// The three heuristics are `min_gene_len`, `max_shine_dalgarno_distance`
/// and `min_gap`; the remaining fields control execution and output.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use gpred_core::config::GpredConfig;
///
/// let config = GpredConfig::default();
/// assert_eq!(config.min_gene_len, 50);
/// ```
///
/// ## Short genes packed closely together
///
/// ```rust
/// use gpred_core::config::GpredConfig;
///
/// let config = GpredConfig {
///     min_gene_len: 9,
///     min_gap: 1,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GpredConfig {
    /// Minimum gene length in base pairs.
    ///
    /// A candidate is kept only when its length, stop codon included, is
    /// strictly greater than this value.
    ///
    /// **Default**: `50`
    pub min_gene_len: usize,

    /// Maximum distance upstream of the start codon where a Shine-Dalgarno
    /// motif is searched.
    ///
    /// The motif window spans `[start - distance, start - 6)`.
    ///
    /// **Default**: `16`
    pub max_shine_dalgarno_distance: usize,

    /// Minimum gap between two genes, ribosome binding site not included.
    ///
    /// **Default**: `40`
    pub min_gap: usize,

    /// Scan the forward and reverse-complement strands concurrently.
    ///
    /// **Default**: `true`
    pub parallel_strands: bool,

    /// Number of threads for the strand scans.
    ///
    /// When set, a dedicated Rayon pool of this size runs the scans.
    ///
    /// **Default**: `None` (global Rayon pool)
    pub num_threads: Option<usize>,

    /// Suppress informational output during processing.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Residues per line in FASTA output.
    ///
    /// **Default**: `70`
    pub line_width: usize,
}

impl Default for GpredConfig {
    fn default() -> Self {
        Self {
            min_gene_len: DEFAULT_MIN_GENE_LEN,
            max_shine_dalgarno_distance: DEFAULT_MAX_SHINE_DALGARNO_DISTANCE,
            min_gap: DEFAULT_MIN_GAP,
            parallel_strands: true,
            num_threads: None,
            quiet: false,
            line_width: FASTA_LINE_WIDTH,
        }
    }
}

impl GpredConfig {
    /// Checks the execution settings.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidConfig`] for a zero line width or a
    /// zero-sized thread pool.
    pub fn validate(&self) -> Result<(), GpredError> {
        if self.line_width == 0 {
            return Err(GpredError::InvalidConfig(
                "line width must be at least 1".to_string(),
            ));
        }
        if self.num_threads == Some(0) {
            return Err(GpredError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
