use std::path::Path;

use log::info;

use crate::algorithms::{GenePredictor, ScanStats};
use crate::config::GpredConfig;
use crate::constants::DEFAULT_SEQUENCE_HEADER;
use crate::results::{GpredResults, SequenceInfo};
use crate::sequence::{StrandedSequence, read_fasta_sequence};
use crate::types::{GeneInterval, GpredError};

/// High-level gene prediction entry point.
///
/// Validates the input, scans the forward strand and the reverse complement,
/// and maps reverse-strand genes back to forward coordinates.
///
/// # Examples
///
/// ```rust,no_run
/// use gpred_core::{GpredAnalyzer, config::GpredConfig};
///
/// let analyzer = GpredAnalyzer::new(GpredConfig::default())?;
/// let results = analyzer.analyze_fasta_file("genome.fasta")?;
///
/// println!(
///     "{} forward and {} reverse genes",
///     results.forward_genes.len(),
///     results.reverse_genes.len()
/// );
/// # Ok::<(), gpred_core::types::GpredError>(())
/// ```
#[derive(Debug)]
pub struct GpredAnalyzer {
    /// Configuration options for gene prediction
    pub config: GpredConfig,
    predictor: GenePredictor,
    /// Dedicated pool when `config.num_threads` is set
    thread_pool: Option<rayon::ThreadPool>,
}

impl GpredAnalyzer {
    /// Creates an analyzer for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidConfig`] for invalid settings and
    /// [`GpredError::ThreadPool`] if the requested pool cannot be built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gpred_core::{GpredAnalyzer, config::GpredConfig};
    ///
    /// let analyzer = GpredAnalyzer::new(GpredConfig {
    ///     num_threads: Some(2),
    ///     ..Default::default()
    /// })?;
    /// # Ok::<(), gpred_core::types::GpredError>(())
    /// ```
    pub fn new(config: GpredConfig) -> Result<Self, GpredError> {
        config.validate()?;
        let predictor = GenePredictor::new(&config)?;

        let thread_pool = match config.num_threads {
            Some(num_threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| GpredError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            config,
            predictor,
            thread_pool,
        })
    }

    /// The single-strand predictor used for both scans.
    #[must_use]
    pub const fn predictor(&self) -> &GenePredictor {
        &self.predictor
    }

    /// Analyzes the genome in a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError`] if the file cannot be read or parsed, or holds
    /// symbols other than A, C, G, T.
    pub fn analyze_fasta_file<P: AsRef<Path>>(&self, path: P) -> Result<GpredResults, GpredError> {
        let genome = read_fasta_sequence(path)?;
        let header = if genome.id.is_empty() {
            DEFAULT_SEQUENCE_HEADER.to_string()
        } else {
            genome.id
        };
        self.analyze_sequence_bytes(&genome.sequence, header, genome.description)
    }

    /// Analyzes a sequence held in a string.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidSymbol`] for symbols other than uppercase
    /// A, C, G, T.
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        header: Option<String>,
    ) -> Result<GpredResults, GpredError> {
        let header = header.unwrap_or_else(|| DEFAULT_SEQUENCE_HEADER.to_string());
        self.analyze_sequence_bytes(sequence.as_bytes(), header, None)
    }

    /// Analyzes raw sequence bytes.
    ///
    /// The reverse complement is built before anything is scanned, so an
    /// invalid symbol fails the whole analysis.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidSymbol`] for symbols other than uppercase
    /// A, C, G, T.
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> Result<GpredResults, GpredError> {
        let stranded = StrandedSequence::new(sequence)?;
        if !self.config.quiet {
            info!("Analyzing {} ({} bp)", header, stranded.len());
        }

        let ((forward_genes, forward_stats), (reverse_local, reverse_stats)) =
            self.scan_strands(&stranded);

        let reverse_genes: Vec<GeneInterval> = reverse_local
            .iter()
            .map(|gene| gene.to_forward(stranded.len()))
            .collect();

        if !self.config.quiet {
            info!(
                "{}: {} forward genes ({} candidates rejected), {} reverse genes ({} candidates rejected)",
                header,
                forward_genes.len(),
                forward_stats.rejected(),
                reverse_genes.len(),
                reverse_stats.rejected()
            );
        }

        Ok(GpredResults {
            sequence_info: SequenceInfo {
                length: stranded.len(),
                gc_content: stranded.gc_content,
                num_genes: forward_genes.len() + reverse_genes.len(),
                header,
                description,
            },
            forward_genes,
            reverse_genes,
            sequence: stranded,
        })
    }

    /// Scans both strands, concurrently when `parallel_strands` is set.
    fn scan_strands(
        &self,
        stranded: &StrandedSequence,
    ) -> ((Vec<GeneInterval>, ScanStats), (Vec<GeneInterval>, ScanStats)) {
        let scan_both = || {
            let forward = || self.predictor.scan(&stranded.forward_sequence);
            let reverse = || self.predictor.scan(&stranded.reverse_complement_sequence);
            if self.config.parallel_strands {
                rayon::join(forward, reverse)
            } else {
                (forward(), reverse())
            }
        };

        match &self.thread_pool {
            Some(pool) => pool.install(scan_both),
            None => scan_both(),
        }
    }
}
