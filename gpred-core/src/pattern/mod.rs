//! Fixed nucleotide pattern matching.
//!
//! Patterns are small alternations over the uppercase DNA alphabet. They are
//! compiled once with [`Pattern::parse`] and then searched either inside a
//! bounded region ([`Pattern::search`]) or lazily over every overlapping
//! occurrence ([`Pattern::find_iter`]).
//!
//! ## Grammar
//!
//! | Syntax      | Meaning                                           |
//! |-------------|---------------------------------------------------|
//! | `A C G T`   | literal base                                      |
//! | `.`         | any base                                          |
//! | `[TG]`      | one of the listed bases (`[T\|G]` is accepted too) |
//! | `x?`        | previous element is optional                      |
//! | `x{n}`      | previous element repeated exactly `n` times       |
//! | `p\|q`      | either branch                                     |
//!
//! ```rust
//! use gpred_core::pattern::Pattern;
//!
//! let motif = Pattern::parse("GG.GG")?;
//! let hits: Vec<usize> = motif.find_iter(b"GGAGGAGG", 0).collect();
//! assert_eq!(hits, vec![0, 3]);
//! # Ok::<(), gpred_core::types::GpredError>(())
//! ```

mod parser;

use std::fmt;
use std::iter::FusedIterator;

use crate::types::GpredError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Atom {
    Base(u8),
    Class(Vec<u8>),
    Any,
}

impl Atom {
    fn accepts(&self, symbol: u8) -> bool {
        match self {
            Self::Base(base) => *base == symbol,
            Self::Class(bases) => bases.contains(&symbol),
            Self::Any => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    atom: Atom,
    optional: bool,
}

/// A compiled nucleotide pattern.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    alternatives: Vec<Vec<Token>>,
}

impl Pattern {
    /// Compiles `source`.
    ///
    /// # Errors
    ///
    /// Returns [`GpredError::InvalidPattern`] for empty branches, symbols
    /// outside the grammar, unterminated or empty classes, and `?` or `{n}`
    /// with nothing to apply to.
    pub fn parse(source: &str) -> Result<Self, GpredError> {
        let alternatives = parser::parse_alternatives(source)?;
        Ok(Self {
            source: source.to_string(),
            alternatives,
        })
    }

    /// The pattern text this was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Finds the first occurrence lying entirely inside `sequence[lo..hi]`.
    ///
    /// Occurrences are tried by increasing start position. An empty or
    /// inverted region finds nothing; `hi` past the end is clamped.
    #[must_use]
    pub fn search(&self, sequence: &[u8], lo: usize, hi: usize) -> Option<usize> {
        let hi = hi.min(sequence.len());
        (lo..hi).find(|&pos| self.matches_at(sequence, pos, hi))
    }

    /// Iterates every occurrence starting at or after `from`, overlapping
    /// occurrences included, in increasing start order.
    #[must_use]
    pub fn find_iter<'p, 's>(&'p self, sequence: &'s [u8], from: usize) -> Matches<'p, 's> {
        Matches {
            pattern: self,
            sequence,
            position: from,
        }
    }

    /// Whether some branch matches at `pos` without reading at or past `end`.
    fn matches_at(&self, sequence: &[u8], pos: usize, end: usize) -> bool {
        self.alternatives
            .iter()
            .any(|tokens| match_tokens(tokens, sequence, pos, end))
    }
}

fn match_tokens(tokens: &[Token], sequence: &[u8], pos: usize, end: usize) -> bool {
    let Some((token, rest)) = tokens.split_first() else {
        return true;
    };

    let consumed = pos < end
        && token.atom.accepts(sequence[pos])
        && match_tokens(rest, sequence, pos + 1, end);

    consumed || (token.optional && match_tokens(rest, sequence, pos, end))
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Lazy iterator over occurrence start positions, see [`Pattern::find_iter`].
#[derive(Debug, Clone)]
pub struct Matches<'p, 's> {
    pattern: &'p Pattern,
    sequence: &'s [u8],
    position: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let end = self.sequence.len();
        while self.position < end {
            let pos = self.position;
            self.position += 1;
            if self.pattern.matches_at(self.sequence, pos, end) {
                return Some(pos);
            }
        }
        None
    }
}

impl FusedIterator for Matches<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SHINE_DALGARNO_PATTERN, START_PATTERN, STOP_PATTERN};

    fn pattern(source: &str) -> Pattern {
        Pattern::parse(source).unwrap()
    }

    #[test]
    fn test_literal_search() {
        let p = pattern("GAGG");
        assert_eq!(p.search(b"CCGAGGCC", 0, 8), Some(2));
        assert_eq!(p.search(b"CCGAGGCC", 3, 8), None);
    }

    #[test]
    fn test_search_returns_leftmost_start() {
        let p = pattern(SHINE_DALGARNO_PATTERN);
        // GGAG at 1 wins over the longer AGGAGG further right
        assert_eq!(p.search(b"CGGAGCAGGAGG", 0, 12), Some(1));
    }

    #[test]
    fn test_search_match_must_fit_before_hi() {
        let p = pattern("AGGAGG");
        let seq = b"CCAGGAGGCC";
        assert_eq!(p.search(seq, 0, 8), Some(2));
        assert_eq!(p.search(seq, 0, 7), None);
    }

    #[test]
    fn test_optional_elements_shrink_to_fit_region() {
        let p = pattern("A?G?GAGG");
        let seq = b"AGGAGGC";
        // Whole AGGAGG fits
        assert_eq!(p.search(seq, 0, 6), Some(0));
        // Only GAGG at 2 fits when the region starts at 2
        assert_eq!(p.search(seq, 2, 6), Some(2));
        // AGGAG: no branch completes inside the region
        assert_eq!(p.search(seq, 0, 5), None);
    }

    #[test]
    fn test_search_empty_or_inverted_region() {
        let p = pattern("A");
        assert_eq!(p.search(b"AAAA", 2, 2), None);
        assert_eq!(p.search(b"AAAA", 3, 1), None);
        assert_eq!(p.search(b"", 0, 0), None);
    }

    #[test]
    fn test_search_clamps_hi_to_sequence() {
        let p = pattern("TA");
        assert_eq!(p.search(b"CCTA", 0, 100), Some(2));
    }

    #[test]
    fn test_find_iter_overlapping() {
        let p = pattern("GG.GG");
        let hits: Vec<usize> = p.find_iter(b"GGAGGAGG", 0).collect();
        assert_eq!(hits, vec![0, 3]);
    }

    #[test]
    fn test_find_iter_from_offset() {
        let p = pattern(STOP_PATTERN);
        let seq = b"TAACCTAGCCTGA";
        let hits: Vec<usize> = p.find_iter(seq, 1).collect();
        assert_eq!(hits, vec![5, 10]);
    }

    #[test]
    fn test_find_iter_is_restartable() {
        let p = pattern("AA");
        let seq = b"AAAA";
        let first: Vec<usize> = p.find_iter(seq, 0).collect();
        let second: Vec<usize> = p.find_iter(seq, 0).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_iter_past_end() {
        let p = pattern("A");
        assert_eq!(p.find_iter(b"AAA", 10).next(), None);
    }

    #[test]
    fn test_start_pattern_codons() {
        let p = pattern(START_PATTERN);
        for codon in ["ATT", "ATG", "GTG", "TTG", "CTG"] {
            assert_eq!(p.search(codon.as_bytes(), 0, 3), Some(0), "{codon}");
        }
        for codon in ["ATA", "ATC", "AAG", "TAG", "GGG"] {
            assert_eq!(p.search(codon.as_bytes(), 0, 3), None, "{codon}");
        }
    }

    #[test]
    fn test_stop_pattern_codons() {
        let p = pattern(STOP_PATTERN);
        for codon in ["TAA", "TAG", "TGA"] {
            assert_eq!(p.search(codon.as_bytes(), 0, 3), Some(0), "{codon}");
        }
        for codon in ["TAT", "TGG", "AGA"] {
            assert_eq!(p.search(codon.as_bytes(), 0, 3), None, "{codon}");
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let p = pattern(START_PATTERN);
        assert_eq!(p.search(b"atg", 0, 3), None);
    }

    #[test]
    fn test_display_and_debug() {
        let p = pattern(STOP_PATTERN);
        assert_eq!(p.to_string(), "TA[GA]|TGA");
        assert_eq!(p.as_str(), STOP_PATTERN);
        assert_eq!(format!("{p:?}"), "Pattern(\"TA[GA]|TGA\")");
    }
}
