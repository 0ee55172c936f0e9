//! Path step grammar.
//!
//! A path is a sequence of steps separated by `.`. Each step is either a
//! plain key (`[A-Za-z0-9_]+`) or an indexed step: an optional key
//! followed by a bracketed index whose content is digits, `+` (append,
//! write side) or `-` (last element, delete side). Steps match the grammar
//! in full; there is no escaping for literal `.`, `[` or `]`.

use crate::PathError;

/// The bracketed part of an indexed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexToken {
    /// Zero-based position.
    At(usize),
    /// `+`: append at the end; only the set operation accepts this.
    Append,
    /// `-`: the last element; only delete and get accept this.
    Last,
}

/// One `.`-separated unit of a path expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Addresses a mapping entry by key.
    Key(&'a str),
    /// Addresses a sequence element, through a mapping entry when `key`
    /// is non-empty.
    Indexed { key: &'a str, index: IndexToken },
}

impl<'a> Step<'a> {
    /// Classifies a raw step against the union of the set-side and
    /// delete-side grammars. Callers reject the sign token that does not
    /// belong to their operation.
    pub fn parse(raw: &'a str) -> Result<Step<'a>, PathError> {
        let bytes = raw.as_bytes();
        let mut split = 0;
        while split < bytes.len() && is_word(bytes[split]) {
            split += 1;
        }

        if split == bytes.len() {
            if raw.is_empty() {
                return Err(PathError::InvalidStep(raw.to_string()));
            }
            return Ok(Step::Key(raw));
        }

        let inner = raw[split..]
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| PathError::InvalidStep(raw.to_string()))?;

        let index = match inner {
            "+" => IndexToken::Append,
            "-" => IndexToken::Last,
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                let at = digits
                    .parse::<usize>()
                    .map_err(|_| PathError::InvalidStep(raw.to_string()))?;
                IndexToken::At(at)
            }
            _ => return Err(PathError::InvalidStep(raw.to_string())),
        };

        Ok(Step::Indexed {
            key: &raw[..split],
            index,
        })
    }
}

fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

// ── Tests ─────────────────────────────────────────────────────────────────
