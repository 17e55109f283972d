//! Output formatting for gene prediction results.
//!
//! ## Supported Formats
//!
//! - **Positions**: `Start,Stop` CSV table of forward-strand genes
//! - **FASTA**: nucleotide sequence of every gene, forward strand first
//!
//! The positions table holds forward-strand genes only. Reverse-strand
//! positions are written separately with [`write_positions_file`] when wanted.
//!
//! ## Examples
//!
//! ### Write results to files
//!
//! ```rust,no_run
//! use gpred_core::{GpredAnalyzer, config::GpredConfig};
//! use gpred_core::output::{write_genes_file, write_positions_file};
//!
//! let analyzer = GpredAnalyzer::new(GpredConfig::default())?;
//! let results = analyzer.analyze_fasta_file("genome.fasta")?;
//!
//! write_positions_file("predict_genes.csv", &results.forward_genes)?;
//! write_genes_file("genes.fna", &results, 70)?;
//! # Ok::<(), gpred_core::types::GpredError>(())
//! ```
//!
//! ### Write to stdout
//!
//! ```rust,no_run
//! use gpred_core::{GpredAnalyzer, config::{GpredConfig, OutputFormat}};
//! use gpred_core::output::write_results;
//! use std::io::stdout;
//!
//! let analyzer = GpredAnalyzer::new(GpredConfig::default())?;
//! let results = analyzer.analyze_sequence("ATGCGATCG", None)?;
//!
//! write_results(&mut stdout(), &results, OutputFormat::Positions, 70)?;
//! # Ok::<(), gpred_core::types::GpredError>(())
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{
    GpredError, config::OutputFormat, results::GpredResults, types::GeneInterval,
};

mod formats {
    pub mod fasta;
    pub mod positions;
}

pub use formats::{fasta::write_fasta_format, positions::write_positions_format};

/// Writes gene prediction results in the specified format.
///
/// `line_width` only applies to FASTA output.
///
/// # Errors
///
/// Returns [`GpredError`] if writing fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &GpredResults,
    format: OutputFormat,
    line_width: usize,
) -> Result<(), GpredError> {
    match format {
        OutputFormat::Positions => write_positions_format(writer, &results.forward_genes),
        OutputFormat::Fasta => write_fasta_format(writer, results, line_width),
    }
}

/// Creates `path` and writes a `Start,Stop` table of `genes` to it.
///
/// # Errors
///
/// Returns [`GpredError::Output`] naming `path` if it cannot be created or written.
pub fn write_positions_file<P: AsRef<Path>>(
    path: P,
    genes: &[GeneInterval],
) -> Result<(), GpredError> {
    let path = path.as_ref();
    write_to_file(path, |writer| write_positions_format(writer, genes))
}

/// Creates `path` and writes the FASTA record of every predicted gene to it.
///
/// # Errors
///
/// Returns [`GpredError::Output`] naming `path` if it cannot be created or written.
pub fn write_genes_file<P: AsRef<Path>>(
    path: P,
    results: &GpredResults,
    line_width: usize,
) -> Result<(), GpredError> {
    let path = path.as_ref();
    write_to_file(path, |writer| write_fasta_format(writer, results, line_width))
}

fn write_to_file<F>(path: &Path, write: F) -> Result<(), GpredError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), GpredError>,
{
    let file = File::create(path).map_err(|source| GpredError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    write(&mut writer)
        .and_then(|()| writer.flush().map_err(GpredError::from))
        .map_err(|error| with_destination(path, error))
}

/// Attaches `path` to I/O failures raised while writing it.
fn with_destination(path: &Path, error: GpredError) -> GpredError {
    match error {
        GpredError::IoError(source) => GpredError::Output {
            path: path.to_path_buf(),
            source,
        },
        GpredError::Csv(error) => match error.kind() {
            csv::ErrorKind::Io(source) => GpredError::Output {
                path: path.to_path_buf(),
                source: std::io::Error::new(source.kind(), source.to_string()),
            },
            _ => GpredError::Csv(error),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{results::SequenceInfo, sequence::StrandedSequence};
    use std::fs;
    use std::io::Cursor;

    fn create_test_results() -> GpredResults {
        let sequence = StrandedSequence::new(b"CCATGAAATAGCCCTATTTCATCC").unwrap();
        GpredResults {
            sequence_info: SequenceInfo {
                header: "test_seq".to_string(),
                length: sequence.len(),
                description: Some("Test sequence".to_string()),
                gc_content: sequence.gc_content,
                num_genes: 2,
            },
            forward_genes: vec![GeneInterval::new(3, 11)],
            reverse_genes: vec![GeneInterval::new(14, 22)],
            sequence,
        }
    }

    #[test]
    fn test_write_results_positions_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        write_results(&mut cursor, &results, OutputFormat::Positions, 70).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        // Reverse-strand genes stay out of the table
        assert_eq!(output, "Start,Stop\n3,11\n");
    }

    #[test]
    fn test_write_results_fasta_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        write_results(&mut cursor, &results, OutputFormat::Fasta, 70).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.matches('>').count(), 2);
        assert!(output.contains(">gene_2\n"));
    }

    #[test]
    fn test_write_positions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predict_genes.csv");
        let results = create_test_results();

        write_positions_file(&path, &results.reverse_genes).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Start,Stop\n14,22\n");
    }

    #[test]
    fn test_write_genes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genes.fna");
        let results = create_test_results();

        write_genes_file(&path, &results, 70).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            ">gene_1\nATGAAATAG\n>gene_2\nATGAAATAG\n"
        );
    }

    #[test]
    fn test_unwritable_destination_is_named() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("genes.fna");
        let results = create_test_results();

        match write_genes_file(&path, &results, 70) {
            Err(GpredError::Output { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Output error, got {other:?}"),
        }
        assert!(write_positions_file(&path, &results.forward_genes).is_err());
    }
}
