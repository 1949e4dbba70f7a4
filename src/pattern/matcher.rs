//! Ordered phrase matching over a token window.

use crate::error::BopError;
use crate::pattern::primitive::{Capture, Pattern};

/// Aggregate result of matching a full phrase against a token window.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseMatch {
    /// Captures in phrase order.
    pub captures: Vec<Capture>,
    /// Whether a negation marker matched inside the phrase.
    pub negated: bool,
    /// Number of tokens the phrase consumed.
    pub tokens_consumed: usize,
}

/// Match an ordered primitive sequence against the front of `tokens`.
///
/// Primitives are walked in order against consecutive token positions
/// starting at 0. Positions past the end of the window test against the
/// empty string, so trailing `Opt`/`Not` primitives can still succeed at
/// end of input. Any primitive mismatch fails the whole phrase
/// (`Ok(None)`); a position only advances when the primitive consumed its
/// token.
///
/// # Errors
///
/// Returns [`BopError::DoubleNegation`] if two primitives both claim the
/// negation slot. At most one negation per phrase is a structural
/// invariant of the pattern table, so this is an authoring bug, not a
/// normal mismatch.
pub fn match_phrase(
    patterns: &[Pattern],
    tokens: &[String],
) -> Result<Option<PhraseMatch>, BopError> {
    let mut pos = 0usize;
    let mut captures = Vec::new();
    let mut negated = false;

    for pattern in patterns {
        let token = tokens.get(pos).map(String::as_str).unwrap_or("");
        let Some(word) = pattern.test(token) else {
            return Ok(None);
        };
        if word.consumed {
            pos += 1;
        }
        if let Some(capture) = word.captured {
            captures.push(capture);
        }
        if word.negated {
            if negated {
                return Err(BopError::DoubleNegation);
            }
            negated = true;
        }
    }

    Ok(Some(PhraseMatch {
        captures,
        negated,
        tokens_consumed: pos,
    }))
}
