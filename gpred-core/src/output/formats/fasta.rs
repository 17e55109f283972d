use std::io::Write;

use crate::{results::GpredResults, types::GpredError};

/// Write gene sequences as FASTA records `gene_1`, `gene_2`, ...
///
/// Forward-strand genes come first, then reverse-strand genes read on the
/// reverse complement; numbering runs across both.
pub fn write_fasta_format<W: Write>(
    writer: &mut W,
    results: &GpredResults,
    line_width: usize,
) -> Result<(), GpredError> {
    let line_width = line_width.max(1);
    for (i, gene) in results.genes().enumerate() {
        writeln!(writer, ">gene_{}", i + 1)?;
        let bases = results.sequence.gene_bases(&gene.interval, gene.strand);
        for line in bases.chunks(line_width) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        results::SequenceInfo,
        sequence::StrandedSequence,
        types::GeneInterval,
    };

    fn results_for(
        sequence: &[u8],
        forward_genes: Vec<GeneInterval>,
        reverse_genes: Vec<GeneInterval>,
    ) -> GpredResults {
        let sequence = StrandedSequence::new(sequence).unwrap();
        GpredResults {
            sequence_info: SequenceInfo {
                length: sequence.len(),
                gc_content: sequence.gc_content,
                num_genes: forward_genes.len() + reverse_genes.len(),
                header: "test_seq".to_string(),
                description: None,
            },
            forward_genes,
            reverse_genes,
            sequence,
        }
    }

    #[test]
    fn test_write_fasta_format_forward_and_reverse() {
        // ATGAAATAG forward at 3..11, CTATTTCAT (its reverse complement) at 14..22
        let results = results_for(
            b"CCATGAAATAGCCCTATTTCATCC",
            vec![GeneInterval::new(3, 11)],
            vec![GeneInterval::new(14, 22)],
        );

        let mut buffer = Vec::new();
        write_fasta_format(&mut buffer, &results, 70).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, ">gene_1\nATGAAATAG\n>gene_2\nATGAAATAG\n");
    }

    #[test]
    fn test_write_fasta_format_numbering_without_forward_genes() {
        let results = results_for(
            b"CCATGAAATAGCCCTATTTCATCC",
            vec![],
            vec![GeneInterval::new(14, 22)],
        );

        let mut buffer = Vec::new();
        write_fasta_format(&mut buffer, &results, 70).unwrap();

        assert!(String::from_utf8(buffer).unwrap().starts_with(">gene_1\n"));
    }

    #[test]
    fn test_write_fasta_format_wraps_lines() {
        let results = results_for(
            b"CCATGAAATAGCC",
            vec![GeneInterval::new(3, 11)],
            vec![],
        );

        let mut buffer = Vec::new();
        write_fasta_format(&mut buffer, &results, 4).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, ">gene_1\nATGA\nAATA\nG\n");
    }

    #[test]
    fn test_write_fasta_format_no_genes() {
        let results = results_for(b"ACGT", vec![], vec![]);

        let mut buffer = Vec::new();
        write_fasta_format(&mut buffer, &results, 70).unwrap();
        assert!(buffer.is_empty());
    }
}
