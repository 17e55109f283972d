use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bio::io::fasta;
use log::warn;

use crate::types::GpredError;

/// A genome read from FASTA: record id, optional description and the
/// upper-cased bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaGenome {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

/// Reads a FASTA file into a single sequence using rust-bio.
///
/// Header lines are dropped and the bases of every record are concatenated
/// and upper-cased. Identification comes from the first record. An empty
/// file yields an empty sequence with an empty id.
///
/// A file whose first non-blank byte is not `>` holds bare sequence: its
/// lines are joined and the id is left empty.
///
/// # Errors
///
/// Returns [`GpredError::IoError`] when the file cannot be opened and
/// [`GpredError::ParseError`] for malformed records.
pub fn read_fasta_sequence<P: AsRef<Path>>(path: P) -> Result<FastaGenome, GpredError> {
    let mut input = BufReader::new(File::open(path.as_ref())?);
    let has_header = input
        .fill_buf()?
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        == Some(&b'>');
    if !has_header {
        return read_bare_sequence(input);
    }

    let reader = fasta::Reader::new(input);

    let mut genome = FastaGenome {
        id: String::new(),
        description: None,
        sequence: Vec::new(),
    };
    let mut record_count = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| GpredError::ParseError(e.to_string()))?;
        if record_count == 0 {
            genome.id = record.id().to_string();
            genome.description = record.desc().map(String::from);
        }
        genome
            .sequence
            .extend(record.seq().iter().map(u8::to_ascii_uppercase));
        record_count += 1;
    }

    if record_count > 1 {
        warn!(
            "{} holds {} records; their sequences were concatenated",
            path.as_ref().display(),
            record_count
        );
    }

    Ok(genome)
}

fn read_bare_sequence<R: BufRead>(input: R) -> Result<FastaGenome, GpredError> {
    let mut sequence = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.starts_with('>') {
            continue;
        }
        sequence.extend(line.trim().bytes().map(|b| b.to_ascii_uppercase()));
    }

    Ok(FastaGenome {
        id: String::new(),
        description: None,
        sequence,
    })
}
