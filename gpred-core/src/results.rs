use bio::bio_types::strand::Strand;

use crate::sequence::StrandedSequence;
use crate::types::{Gene, GeneInterval};

/// Gene prediction results for one genome.
///
/// Forward and reverse strand genes are kept in separate lists, each in scan
/// order. Both lists use forward-strand coordinates.
///
/// # Examples
///
/// ```rust
/// use gpred_core::{GpredAnalyzer, config::GpredConfig};
///
/// let config = GpredConfig {
///     min_gene_len: 9,
///     min_gap: 1,
///     ..Default::default()
/// };
/// let analyzer = GpredAnalyzer::new(config)?;
/// let results = analyzer.analyze_sequence("AGGAGGCCCCCCCCCCATGAAACGTTAGCCCC", None)?;
///
/// println!("Sequence: {}", results.sequence_info.header);
/// println!("Length: {} bp", results.sequence_info.length);
/// println!("GC%: {:.2}", results.sequence_info.gc_content * 100.0);
/// println!("Genes: {}", results.sequence_info.num_genes);
/// # Ok::<(), gpred_core::types::GpredError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GpredResults {
    /// Genes predicted on the forward strand.
    pub forward_genes: Vec<GeneInterval>,

    /// Genes predicted on the reverse-complement strand, remapped to
    /// forward-strand coordinates.
    pub reverse_genes: Vec<GeneInterval>,

    /// The analyzed sequence and its reverse complement.
    pub sequence: StrandedSequence,

    /// Information about the analyzed sequence.
    pub sequence_info: SequenceInfo,
}

impl GpredResults {
    /// All genes, forward strand first, each tagged with its strand.
    pub fn genes(&self) -> impl Iterator<Item = Gene> + '_ {
        let forward = self.forward_genes.iter().map(|&interval| Gene {
            interval,
            strand: Strand::Forward,
        });
        let reverse = self.reverse_genes.iter().map(|&interval| Gene {
            interval,
            strand: Strand::Reverse,
        });
        forward.chain(reverse)
    }
}

/// Information about a processed sequence.
#[derive(Debug, Clone)]
pub struct SequenceInfo {
    /// Length of the sequence in base pairs.
    pub length: usize,

    /// GC content as a fraction (0.0 to 1.0).
    pub gc_content: f64,

    /// Number of genes predicted on both strands.
    pub num_genes: usize,

    /// Sequence identifier from FASTA header.
    pub header: String,

    /// Sequence description from FASTA header.
    pub description: Option<String>,
}
