//! Sequence handling utilities.
//!
//! ## Modules
//!
//! - [`stranded`]: a validated sequence held together with its reverse complement
//! - [`io`]: FASTA file reading
//!
//! ## Examples
//!
//! ```rust
//! use gpred_core::sequence::reverse_complement;
//!
//! let rc = reverse_complement(b"ATGAAACGT")?;
//! assert_eq!(rc, b"ACGTTTCAT");
//! # Ok::<(), gpred_core::types::GpredError>(())
//! ```

pub mod io;
pub mod stranded;

pub use io::*;
pub use stranded::StrandedSequence;

use crate::types::GpredError;

/// Watson-Crick complement of an uppercase base.
#[must_use]
pub const fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

/// Reverse complement of `sequence`.
///
/// Output index `i` holds the complement of input index `len - 1 - i`.
///
/// # Errors
///
/// Returns [`GpredError::InvalidSymbol`] for a symbol outside `A`, `C`,
/// `G`, `T`, with its position in `sequence`. Symbols are visited from the
/// 3' end, so the last offending symbol is the one reported.
pub fn reverse_complement(sequence: &[u8]) -> Result<Vec<u8>, GpredError> {
    sequence
        .iter()
        .enumerate()
        .rev()
        .map(|(position, &symbol)| {
            complement(symbol).ok_or(GpredError::InvalidSymbol {
                symbol: symbol as char,
                position,
            })
        })
        .collect()
}

/// Fraction of G and C bases, `0.0` for an empty sequence.
#[must_use]
pub fn gc_content(sequence: &[u8]) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .iter()
        .filter(|&&b| matches!(b, b'G' | b'C'))
        .count();
    gc as f64 / sequence.len() as f64
}
