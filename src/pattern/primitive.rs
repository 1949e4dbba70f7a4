//! Single-token pattern primitives.
//!
//! Each [`Pattern`] variant knows how to test exactly one token. A closed
//! enum keeps dispatch exhaustive: adding a primitive forces every match
//! site to handle it.

/// A typed value extracted from a matched token.
#[derive(Debug, Clone, PartialEq)]
pub enum Capture {
    /// An exact integer, from an integer capture.
    Int(i64),
    /// A decimal number, from a decimal capture.
    Decimal(f64),
    /// A byte multiplier, from a size-unit capture (e.g. `kb` captures 1000).
    Size(u64),
    /// A verbatim token, from a string or capturing-literal pattern.
    Str(String),
}

/// Result of one primitive testing one token.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordMatch {
    /// Whether the token was consumed (optional patterns may succeed
    /// without consuming).
    pub consumed: bool,
    /// Value captured from the token, if the primitive captures.
    pub captured: Option<Capture>,
    /// Whether this match claims the phrase's negation slot.
    pub negated: bool,
}

impl WordMatch {
    /// A plain consuming match with no capture.
    pub(crate) fn consumed() -> Self {
        WordMatch {
            consumed: true,
            captured: None,
            negated: false,
        }
    }

    /// A consuming match carrying a capture.
    pub(crate) fn capturing(capture: Capture) -> Self {
        WordMatch {
            consumed: true,
            captured: Some(capture),
            negated: false,
        }
    }
}

/// A single-token pattern primitive.
///
/// `test` returns `None` on mismatch; `Opt` and `Not` never return `None`,
/// so they cannot by themselves fail a phrase.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches one fixed word.
    Lit {
        text: &'static str,
        case_sensitive: bool,
        captures: bool,
    },
    /// Matches any word from a fixed list, case-insensitively.
    AnyLit(&'static [&'static str]),
    /// Weakens the inner pattern: on inner mismatch, succeeds without
    /// consuming instead of failing.
    Opt(Box<Pattern>),
    /// Consumes the word `not` and claims the phrase's negation slot;
    /// succeeds without consuming on any other token.
    Not,
    /// Matches a token parsing as a finite decimal number.
    Decimal,
    /// Matches a token parsing as an exact integer.
    Int,
    /// Matches any non-empty token, capturing it verbatim.
    AnyString,
    /// Matches a size-unit word (`b`/`kb`/`mb`/`gb` and long forms),
    /// capturing its byte multiplier.
    SizeUnit,
}

impl Pattern {
    /// A case-insensitive, non-capturing literal.
    pub fn lit(text: &'static str) -> Pattern {
        Pattern::Lit {
            text,
            case_sensitive: false,
            captures: false,
        }
    }

    /// Any word from `words`, case-insensitive.
    pub fn any(words: &'static [&'static str]) -> Pattern {
        Pattern::AnyLit(words)
    }

    /// Wrap `inner` so that a mismatch becomes a non-consuming success.
    pub fn opt(inner: Pattern) -> Pattern {
        Pattern::Opt(Box::new(inner))
    }

    /// Test this primitive against one token.
    pub fn test(&self, token: &str) -> Option<WordMatch> {
        match self {
            Pattern::Lit {
                text,
                case_sensitive,
                captures,
            } => {
                let hit = if *case_sensitive {
                    token == *text
                } else {
                    token.eq_ignore_ascii_case(text)
                };
                if !hit {
                    return None;
                }
                Some(WordMatch {
                    consumed: true,
                    captured: captures.then(|| Capture::Str(token.to_string())),
                    negated: false,
                })
            }
            Pattern::AnyLit(words) => words
                .iter()
                .any(|word| token.eq_ignore_ascii_case(word))
                .then(WordMatch::consumed),
            Pattern::Opt(inner) => Some(inner.test(token).unwrap_or_default()),
            Pattern::Not => {
                if token.eq_ignore_ascii_case("not") {
                    Some(WordMatch {
                        consumed: true,
                        captured: None,
                        negated: true,
                    })
                } else {
                    Some(WordMatch::default())
                }
            }
            Pattern::Decimal => token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(|value| WordMatch::capturing(Capture::Decimal(value))),
            Pattern::Int => token
                .parse::<i64>()
                .ok()
                .map(|value| WordMatch::capturing(Capture::Int(value))),
            Pattern::AnyString => (!token.is_empty())
                .then(|| WordMatch::capturing(Capture::Str(token.to_string()))),
            Pattern::SizeUnit => {
                size_multiplier(token).map(|mult| WordMatch::capturing(Capture::Size(mult)))
            }
        }
    }
}

/// Byte multiplier for a size-unit word, or `None` if the word is not a
/// recognized unit. Units are decimal (kb = 1000), matching how people
/// write sizes in commands.
fn size_multiplier(token: &str) -> Option<u64> {
    match token.to_ascii_lowercase().as_str() {
        "b" | "byte" | "bytes" => Some(1),
        "kb" | "kilobyte" | "kilobytes" => Some(1_000),
        "mb" | "megabyte" | "megabytes" => Some(1_000_000),
        "gb" | "gigabyte" | "gigabytes" => Some(1_000_000_000),
        _ => None,
    }
}
