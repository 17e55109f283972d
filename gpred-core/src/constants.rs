// =============================================================================
// =============================================================================

/// Version string for gpred
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Patterns
// =============================================================================

/// Start codons ATT, ATG, GTG, TTG and CTG.
pub const START_PATTERN: &str = "AT[TG]|[ATCG]TG";

/// Stop codons TAA, TAG and TGA.
pub const STOP_PATTERN: &str = "TA[GA]|TGA";

/// Variable-length motifs around the AGGAGG Shine-Dalgarno consensus.
pub const SHINE_DALGARNO_PATTERN: &str = "A?G?GAGG|GGAG|GG.GG";

// =============================================================================
// Geometry
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Offset from the first base of a stop codon to its last base
pub const STOP_CODON_OFFSET: usize = 2;

/// Bases between the end of the Shine-Dalgarno window and the start codon
pub const SHINE_DALGARNO_DOWNSTREAM_OFFSET: usize = 6;

// =============================================================================
// Defaults
// =============================================================================

/// Minimum gene length in base pairs; accepted genes are strictly longer
pub const DEFAULT_MIN_GENE_LEN: usize = 50;

/// Furthest upstream distance searched for a Shine-Dalgarno motif
pub const DEFAULT_MAX_SHINE_DALGARNO_DISTANCE: usize = 16;

/// Minimum gap between two genes on the same strand, ribosome binding site excluded
pub const DEFAULT_MIN_GAP: usize = 40;

/// Residues per line in gene FASTA output
pub const FASTA_LINE_WIDTH: usize = 70;

/// Default tabular output of predicted gene positions
pub const DEFAULT_POSITIONS_FILE: &str = "predict_genes.csv";

/// Default FASTA output of predicted gene sequences
pub const DEFAULT_GENES_FILE: &str = "genes.fna";

/// Header used when a sequence is analyzed without one
pub const DEFAULT_SEQUENCE_HEADER: &str = "gpred_seq_1";
