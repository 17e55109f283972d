use bio::bio_types::strand::Strand;

use crate::sequence::{gc_content, reverse_complement};
use crate::types::{GeneInterval, GpredError};

/// A validated DNA sequence together with its reverse complement.
///
/// Built once from input and never mutated; both strands are scanned from it.
#[derive(Debug, Clone, PartialEq)]
pub struct StrandedSequence {
    pub forward_sequence: Vec<u8>,
    pub reverse_complement_sequence: Vec<u8>,
    pub gc_content: f64,
    pub sequence_length: usize,
}

impl StrandedSequence {
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidSymbol`] when `sequence` holds anything
    /// other than uppercase `A`, `C`, `G`, `T`.
    pub fn new(sequence: &[u8]) -> Result<Self, GpredError> {
        let reverse_complement_sequence = reverse_complement(sequence)?;

        Ok(Self {
            forward_sequence: sequence.to_vec(),
            reverse_complement_sequence,
            gc_content: gc_content(sequence),
            sequence_length: sequence.len(),
        })
    }

    /// The bases read 5' to 3' on `strand`.
    ///
    /// [`Strand::Unknown`] reads the forward strand.
    #[must_use]
    pub fn strand(&self, strand: Strand) -> &[u8] {
        match strand {
            Strand::Reverse => &self.reverse_complement_sequence,
            Strand::Forward | Strand::Unknown => &self.forward_sequence,
        }
    }

    /// Nucleotides of a gene given in forward coordinates, read on its own strand.
    ///
    /// Reverse-strand genes come out of the reverse complement at their
    /// reverse-local position, so the slice starts with the start codon in
    /// both cases. Forward coordinates are not reused on the reverse
    /// complement.
    #[must_use]
    pub fn gene_bases(&self, gene: &GeneInterval, strand: Strand) -> &[u8] {
        match strand {
            Strand::Reverse => {
                let local = gene.to_forward(self.sequence_length);
                &self.reverse_complement_sequence[local.as_range()]
            }
            Strand::Forward | Strand::Unknown => &self.forward_sequence[gene.as_range()],
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.sequence_length
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sequence_length == 0
    }
}
