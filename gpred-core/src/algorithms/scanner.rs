use log::debug;

use crate::algorithms::codons::{find_start, find_stop};
use crate::algorithms::shine_dalgarno::has_shine_dalgarno;
use crate::config::GpredConfig;
use crate::constants::{
    CODON_LENGTH, SHINE_DALGARNO_PATTERN, START_PATTERN, STOP_CODON_OFFSET, STOP_PATTERN,
};
use crate::pattern::Pattern;
use crate::types::{GeneInterval, GpredError};

/// Counters collected over one strand scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Genes emitted
    pub accepted: usize,
    /// Start codons with no in-frame stop downstream
    pub missing_stop: usize,
    /// Candidates not longer than the minimum gene length
    pub too_short: usize,
    /// Candidates without an upstream Shine-Dalgarno motif
    pub missing_motif: usize,
}

impl ScanStats {
    /// Total number of rejected candidates.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.missing_stop + self.too_short + self.missing_motif
    }
}

/// Linear-scan gene predictor for a single strand.
///
/// Holds the compiled start, stop and Shine-Dalgarno patterns together with
/// the three acceptance thresholds. Scanning does not mutate the predictor,
/// so one instance can serve both strands at once.
///
/// # Examples
///
/// ```rust
/// use gpred_core::algorithms::GenePredictor;
/// use gpred_core::config::GpredConfig;
/// use gpred_core::types::GeneInterval;
///
/// let config = GpredConfig {
///     min_gene_len: 9,
///     min_gap: 1,
///     ..Default::default()
/// };
/// let predictor = GenePredictor::new(&config)?;
///
/// let genes = predictor.predict_genes(b"AGGAGGCCCCCCCCCCATGAAACGTTAGCCCC");
/// assert_eq!(genes, vec![GeneInterval::new(17, 28)]);
/// # Ok::<(), gpred_core::types::GpredError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GenePredictor {
    start_pattern: Pattern,
    stop_pattern: Pattern,
    shine_pattern: Pattern,
    min_gene_len: usize,
    max_shine_dalgarno_distance: usize,
    min_gap: usize,
}

impl GenePredictor {
    /// Compiles the codon and motif patterns and captures the thresholds of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidPattern`] if a built-in pattern fails to compile.
    pub fn new(config: &GpredConfig) -> Result<Self, GpredError> {
        Ok(Self {
            start_pattern: Pattern::parse(START_PATTERN)?,
            stop_pattern: Pattern::parse(STOP_PATTERN)?,
            shine_pattern: Pattern::parse(SHINE_DALGARNO_PATTERN)?,
            min_gene_len: config.min_gene_len,
            max_shine_dalgarno_distance: config.max_shine_dalgarno_distance,
            min_gap: config.min_gap,
        })
    }

    /// Predicts genes on `sequence`, 1-based inclusive, in increasing start order.
    #[must_use]
    pub fn predict_genes(&self, sequence: &[u8]) -> Vec<GeneInterval> {
        self.scan(sequence).0
    }

    /// Predicts genes on `sequence` and reports why candidates were dropped.
    ///
    /// A cursor walks the sequence while at least `min_gap` bases remain:
    ///
    /// 1. find the next start codon from the cursor, stopping the scan when
    ///    there is none;
    /// 2. pair it with the first in-frame stop codon;
    /// 3. require the gene, stop codon included, to be longer than
    ///    `min_gene_len`;
    /// 4. require a Shine-Dalgarno motif upstream.
    ///
    /// Any failed check moves the cursor one base past the start codon. An
    /// accepted gene moves it `min_gap` bases past the gene's last base.
    #[must_use]
    pub fn scan(&self, sequence: &[u8]) -> (Vec<GeneInterval>, ScanStats) {
        let sequence_length = sequence.len();
        let mut genes = Vec::new();
        let mut stats = ScanStats::default();
        let mut pos = 0usize;

        while pos <= sequence_length && sequence_length - pos >= self.min_gap {
            let Some(start) = find_start(&self.start_pattern, sequence, pos, sequence_length)
            else {
                break;
            };

            let Some(stop) = find_stop(&self.stop_pattern, sequence, start) else {
                stats.missing_stop += 1;
                pos = start + 1;
                continue;
            };

            if stop - start + CODON_LENGTH <= self.min_gene_len {
                stats.too_short += 1;
                pos = start + 1;
                continue;
            }

            if !has_shine_dalgarno(
                &self.shine_pattern,
                sequence,
                start,
                self.max_shine_dalgarno_distance,
            ) {
                stats.missing_motif += 1;
                pos = start + 1;
                continue;
            }

            let gene = GeneInterval::new(start + 1, stop + STOP_CODON_OFFSET + 1);
            debug!("Accepted gene {} ({} bp)", gene, gene.len());
            genes.push(gene);
            stats.accepted += 1;
            pos = stop + STOP_CODON_OFFSET + self.min_gap;
        }

        debug!(
            "Scan of {} bp: {} accepted, {} rejected (no stop {}, too short {}, no motif {})",
            sequence_length,
            stats.accepted,
            stats.rejected(),
            stats.missing_stop,
            stats.too_short,
            stats.missing_motif
        );

        (genes, stats)
    }
}
