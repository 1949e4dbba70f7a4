//! Phrase-matching engine for plain-English predicate clauses.
//!
//! This module provides the pattern-matching primitives that recognize
//! predicate phrases such as `that is not empty` or `bigger than 10 kb`:
//!
//! - Tokenization of raw command strings into normalized words
//! - Single-token pattern primitives with typed captures
//! - Ordered phrase matching with optional tokens and negation
//!
//! Matching is backtracking-free: each primitive is a pure function of one
//! token, and a phrase either matches a prefix of the token window or fails
//! as a whole. Disambiguation between overlapping phrases is the pattern
//! table's job (see the `parser` module), not the matcher's.

mod matcher;
mod primitive;
mod token;

pub use matcher::{match_phrase, PhraseMatch};
pub use primitive::{Capture, Pattern, WordMatch};
pub use token::tokenize;
