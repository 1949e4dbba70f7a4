//! batchop - Batch filesystem operations driven by plain-English queries.
//!
//! This library compiles small natural-language commands such as
//! `delete folders that are empty` into composable path predicates and
//! runs them over a recursive directory walk. It supports one-shot
//! execution of a full command and an interactive session that refines a
//! selection line by line.
//!
//! # Features
//!
//! - **Phrase matching**: backtracking-free recognition of predicate
//!   phrases with optional words, negation and typed captures
//! - **Predicate algebra**: closed set of path filters combined by AND,
//!   evaluated lazily during traversal
//! - **Batch actions**: list, count, and recursive delete
//! - **Interactive refinement**: a stack of predicates with `!pop` and
//!   `!clear` undo directives
//!
//! # Quick Start
//!
//! ```no_run
//! use batchop::{parse_command, BatchOp, FileSet};
//!
//! # fn main() -> Result<(), batchop::BopError> {
//! let parsed = parse_command("list files that are not hidden")?;
//! let op = BatchOp::new(".", FileSet::from(parsed.filters))?;
//! for path in op.list() {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`pattern`] - Tokenizer, pattern primitives and phrase matcher
//! - [`parser`] - Pattern table, predicate parser and command parser
//! - [`filter`] - Path predicates
//! - [`fileset`] - AND-combined predicate stack with lazy resolution
//! - [`batch`] - List/count/delete actions bound to a root
//! - [`session`] - Interactive refinement loop
//! - [`error`] - Error types
//! - [`output`] - Response types and formatting

pub mod batch;
pub mod error;
pub mod fileset;
pub mod filter;
pub mod output;
pub mod parser;
pub mod pattern;
pub mod session;

pub use batch::BatchOp;
pub use error::BopError;
pub use fileset::FileSet;
pub use filter::{Filter, SizeOp};
pub use parser::{parse_command, parse_predicates, CommandKind, ParsedCommand};
pub use pattern::{match_phrase, tokenize, Capture, Pattern, PhraseMatch, WordMatch};
pub use session::{LineSource, Session, DIRECTIVE_MARKER};
