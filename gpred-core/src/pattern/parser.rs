use super::{Atom, Token};
use crate::types::GpredError;

fn invalid(source: &str, reason: impl std::fmt::Display) -> GpredError {
    GpredError::InvalidPattern(format!("{source:?}: {reason}"))
}

const fn is_base(symbol: u8) -> bool {
    matches!(symbol, b'A' | b'C' | b'G' | b'T')
}

/// Splits `source` into its top-level branches and compiles each one.
pub(super) fn parse_alternatives(source: &str) -> Result<Vec<Vec<Token>>, GpredError> {
    let bytes = source.as_bytes();
    let mut alternatives = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'|' => {
                if current.is_empty() {
                    return Err(invalid(source, "empty alternative"));
                }
                alternatives.push(std::mem::take(&mut current));
                i += 1;
            }
            symbol if is_base(symbol) => {
                current.push(Token {
                    atom: Atom::Base(symbol),
                    optional: false,
                });
                i += 1;
            }
            b'.' => {
                current.push(Token {
                    atom: Atom::Any,
                    optional: false,
                });
                i += 1;
            }
            b'[' => {
                let close = bytes[i + 1..]
                    .iter()
                    .position(|&b| b == b']')
                    .ok_or_else(|| invalid(source, "unterminated class"))?;
                let body = &bytes[i + 1..i + 1 + close];
                let mut bases = Vec::with_capacity(body.len());
                for &symbol in body.iter().filter(|&&b| b != b'|') {
                    if !is_base(symbol) {
                        return Err(invalid(
                            source,
                            format_args!("unexpected '{}' in class", symbol as char),
                        ));
                    }
                    if !bases.contains(&symbol) {
                        bases.push(symbol);
                    }
                }
                if bases.is_empty() {
                    return Err(invalid(source, "empty class"));
                }
                current.push(Token {
                    atom: Atom::Class(bases),
                    optional: false,
                });
                i += close + 2;
            }
            b'?' => {
                let last = current
                    .last_mut()
                    .filter(|token| !token.optional)
                    .ok_or_else(|| invalid(source, "'?' has nothing to apply to"))?;
                last.optional = true;
                i += 1;
            }
            b'{' => {
                let close = bytes[i + 1..]
                    .iter()
                    .position(|&b| b == b'}')
                    .ok_or_else(|| invalid(source, "unterminated repeat"))?;
                let count: usize = source[i + 1..i + 1 + close]
                    .parse()
                    .map_err(|_| invalid(source, "repeat count is not a number"))?;
                if count == 0 {
                    return Err(invalid(source, "repeat count must be at least 1"));
                }
                let last = current
                    .last()
                    .cloned()
                    .ok_or_else(|| invalid(source, "repeat has nothing to apply to"))?;
                current.extend(std::iter::repeat(last).take(count - 1));
                i += close + 2;
            }
            other => {
                return Err(invalid(
                    source,
                    format_args!("unexpected '{}'", other as char),
                ));
            }
        }
    }

    if current.is_empty() {
        return Err(invalid(source, "empty alternative"));
    }
    alternatives.push(current);
    Ok(alternatives)
}
