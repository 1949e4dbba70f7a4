//! Command and predicate parsing.
//!
//! The grammar is `<command> <noun-phrase>? <predicate-clause>*`. Predicate
//! clauses are recognized by a declaration-ordered pattern table: the first
//! phrase that matches at the current position wins, and parsing advances
//! by however many tokens the phrase consumed. The scan is linear with
//! early exit and no backtracking across committed tokens, because each
//! primitive is a pure function of one token. More specific phrases must be
//! authored before more general ones whenever prefixes could overlap.

use crate::error::BopError;
use crate::filter::{Filter, SizeOp};
use crate::pattern::{match_phrase, tokenize, Capture, Pattern};

/// Supported command kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    List,
    Count,
    Delete,
}

/// A fully parsed command: what to do, and which paths to do it to.
#[derive(Debug)]
pub struct ParsedCommand {
    pub kind: CommandKind,
    pub filters: Vec<Filter>,
}

type Build = fn(Vec<Capture>) -> Result<Filter, BopError>;

/// One pattern-table row: a phrase and the filter it constructs from the
/// phrase's positional captures.
struct TableEntry {
    phrase: Vec<Pattern>,
    build: Build,
}

/// Common clause prefix: optional `that`, optional `is`/`are`, then the
/// negation slot, so `hidden`, `is hidden`, `that is not hidden` all work.
fn clause(tail: impl IntoIterator<Item = Pattern>) -> Vec<Pattern> {
    let mut phrase = vec![
        Pattern::opt(Pattern::lit("that")),
        Pattern::opt(Pattern::any(&["is", "are"])),
        Pattern::Not,
    ];
    phrase.extend(tail);
    phrase
}

fn size_clause(op_words: &'static [&'static str]) -> Vec<Pattern> {
    clause([
        Pattern::any(op_words),
        Pattern::opt(Pattern::lit("than")),
        Pattern::Decimal,
        Pattern::opt(Pattern::SizeUnit),
    ])
}

/// The predicate pattern table, in priority order.
fn pattern_table() -> Vec<TableEntry> {
    vec![
        TableEntry {
            phrase: clause([
                Pattern::opt(Pattern::any(&["a", "an"])),
                Pattern::any(&["file", "files"]),
            ]),
            build: build_is_file,
        },
        TableEntry {
            phrase: clause([
                Pattern::opt(Pattern::any(&["a", "an"])),
                Pattern::any(&["folder", "folders", "directory", "directories"]),
            ]),
            build: build_is_folder,
        },
        TableEntry {
            phrase: clause([Pattern::lit("empty")]),
            build: build_is_empty,
        },
        TableEntry {
            phrase: clause([Pattern::lit("hidden")]),
            build: build_is_hidden,
        },
        TableEntry {
            phrase: clause([
                Pattern::any(&["named", "called"]),
                Pattern::AnyString,
            ]),
            build: build_named,
        },
        TableEntry {
            phrase: clause([Pattern::lit("in"), Pattern::AnyString]),
            build: build_in,
        },
        TableEntry {
            phrase: size_clause(&[">="]),
            build: build_size_ge,
        },
        TableEntry {
            phrase: clause([
                Pattern::lit("at"),
                Pattern::lit("least"),
                Pattern::Decimal,
                Pattern::opt(Pattern::SizeUnit),
            ]),
            build: build_size_ge,
        },
        TableEntry {
            phrase: size_clause(&[">", "bigger", "greater", "larger"]),
            build: build_size_gt,
        },
        TableEntry {
            phrase: size_clause(&["<="]),
            build: build_size_le,
        },
        TableEntry {
            phrase: clause([
                Pattern::lit("at"),
                Pattern::lit("most"),
                Pattern::Decimal,
                Pattern::opt(Pattern::SizeUnit),
            ]),
            build: build_size_le,
        },
        TableEntry {
            phrase: size_clause(&["<", "smaller", "less"]),
            build: build_size_lt,
        },
        TableEntry {
            phrase: vec![
                Pattern::opt(Pattern::lit("that")),
                Pattern::opt(Pattern::lit("does")),
                Pattern::Not,
                Pattern::any(&["end", "ends", "ending"]),
                Pattern::lit("with"),
                Pattern::AnyString,
            ],
            build: build_extension,
        },
        TableEntry {
            phrase: vec![
                Pattern::opt(Pattern::lit("with")),
                Pattern::lit("extension"),
                Pattern::AnyString,
            ],
            build: build_extension,
        },
    ]
}

fn build_is_file(_: Vec<Capture>) -> Result<Filter, BopError> {
    Ok(Filter::IsFile)
}

fn build_is_folder(_: Vec<Capture>) -> Result<Filter, BopError> {
    Ok(Filter::IsFolder)
}

fn build_is_empty(_: Vec<Capture>) -> Result<Filter, BopError> {
    Ok(Filter::IsEmpty)
}

fn build_is_hidden(_: Vec<Capture>) -> Result<Filter, BopError> {
    Ok(Filter::IsHidden)
}

fn build_named(captures: Vec<Capture>) -> Result<Filter, BopError> {
    match captures.as_slice() {
        [Capture::Str(pattern)] => Filter::named(pattern),
        _ => Err(BopError::PatternTable {
            detail: "named phrase expects one string capture",
        }),
    }
}

fn build_in(captures: Vec<Capture>) -> Result<Filter, BopError> {
    match captures.as_slice() {
        [Capture::Str(pattern)] => Filter::in_dir(pattern),
        _ => Err(BopError::PatternTable {
            detail: "in phrase expects one string capture",
        }),
    }
}

fn build_extension(captures: Vec<Capture>) -> Result<Filter, BopError> {
    match captures.as_slice() {
        [Capture::Str(ext)] => Ok(Filter::extension(ext)),
        _ => Err(BopError::PatternTable {
            detail: "extension phrase expects one string capture",
        }),
    }
}

fn build_size_gt(captures: Vec<Capture>) -> Result<Filter, BopError> {
    build_size(SizeOp::Greater, captures)
}

fn build_size_ge(captures: Vec<Capture>) -> Result<Filter, BopError> {
    build_size(SizeOp::GreaterEq, captures)
}

fn build_size_lt(captures: Vec<Capture>) -> Result<Filter, BopError> {
    build_size(SizeOp::Less, captures)
}

fn build_size_le(captures: Vec<Capture>) -> Result<Filter, BopError> {
    build_size(SizeOp::LessEq, captures)
}

/// Threshold is the decimal base times the unit multiplier, rounded to
/// whole bytes; a missing unit means bytes.
fn build_size(op: SizeOp, captures: Vec<Capture>) -> Result<Filter, BopError> {
    let threshold = match captures.as_slice() {
        [Capture::Decimal(base)] => *base,
        [Capture::Decimal(base), Capture::Size(mult)] => *base * *mult as f64,
        _ => {
            return Err(BopError::PatternTable {
                detail: "size phrase expects a decimal and an optional unit",
            })
        }
    };
    Ok(Filter::SizeCompare(op, threshold.round() as u64))
}

/// Parse predicate clauses until the tokens are exhausted.
///
/// Consumption is exhaustive: a position where no table entry matches is
/// a syntax error naming the offending token, never silently ignored.
///
/// # Errors
///
/// [`BopError::UnknownPredicate`] on an unmatched token,
/// [`BopError::BadPattern`] on an invalid glob capture, and
/// [`BopError::DoubleNegation`] on a pattern-table authoring bug.
pub fn parse_predicates(tokens: &[String]) -> Result<Vec<Filter>, BopError> {
    let table = pattern_table();
    let mut filters = Vec::new();
    let mut pos = 0usize;

    while pos < tokens.len() {
        let mut matched = false;
        for entry in &table {
            if let Some(phrase) = match_phrase(&entry.phrase, &tokens[pos..])? {
                // A phrase of only optionals would not advance; skip it.
                if phrase.tokens_consumed == 0 {
                    continue;
                }
                let filter = (entry.build)(phrase.captures)?;
                filters.push(if phrase.negated {
                    Filter::negated(filter)
                } else {
                    filter
                });
                pos += phrase.tokens_consumed;
                matched = true;
                break;
            }
        }
        if !matched {
            return Err(BopError::UnknownPredicate {
                word: tokens[pos].clone(),
            });
        }
    }

    Ok(filters)
}

/// Parse a full command string.
///
/// The leading word selects the command; an optional noun phrase
/// (`anything`/`everything`/`files`/`folders`) sets the base universe,
/// and the rest of the line is predicate clauses. Commands documented by
/// the tool but not implemented (`rename`, `move`, `replace`, `run`) are
/// reported as unsupported rather than unknown.
///
/// # Errors
///
/// [`BopError::EmptyCommand`] on a blank line,
/// [`BopError::UnknownCommand`] / [`BopError::UnsupportedCommand`] on a
/// bad leading word, plus anything [`parse_predicates`] reports.
pub fn parse_command(input: &str) -> Result<ParsedCommand, BopError> {
    let tokens = tokenize(input);
    let Some(head) = tokens.first() else {
        return Err(BopError::EmptyCommand);
    };

    let kind = match head.as_str() {
        "list" => CommandKind::List,
        "count" => CommandKind::Count,
        "delete" => CommandKind::Delete,
        "rename" | "move" | "replace" | "run" => {
            return Err(BopError::UnsupportedCommand { word: head.clone() })
        }
        _ => return Err(BopError::UnknownCommand { word: head.clone() }),
    };

    let mut pos = 1usize;
    let mut filters = Vec::new();
    if let Some(noun) = tokens.get(pos) {
        match noun.as_str() {
            "anything" | "everything" => pos += 1,
            "files" => {
                filters.push(Filter::IsFile);
                pos += 1;
            }
            "folders" => {
                filters.push(Filter::IsFolder);
                pos += 1;
            }
            // Not a noun phrase: leave it for the predicate parser.
            _ => {}
        }
    }

    filters.extend(parse_predicates(&tokens[pos..])?);
    Ok(ParsedCommand { kind, filters })
}
