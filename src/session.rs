//! The interactive refinement session.
//!
//! A session keeps one live [`FileSet`] and narrows it line by line: each
//! input line is parsed as predicate clauses and appended, and the current
//! match count is printed before every prompt. Lines starting with `!` are
//! session directives (`!pop`, `!clear`, `!quit`) rather than predicates.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::BopError;
use crate::fileset::FileSet;
use crate::parser::parse_predicates;
use crate::pattern::tokenize;

/// Marker character introducing a session directive.
pub const DIRECTIVE_MARKER: char = '!';

/// A source of input lines for the session.
///
/// `Ok(None)` means end of input. The default implementation wraps
/// rustyline; tests substitute a scripted source.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, BopError>;
}

/// Line source backed by a rustyline editor, with history.
pub struct RustylineSource {
    editor: DefaultEditor,
}

impl RustylineSource {
    /// # Errors
    ///
    /// Returns [`BopError::Readline`] if the editor fails to initialize.
    pub fn new() -> Result<RustylineSource, BopError> {
        let editor = DefaultEditor::new().map_err(|err| BopError::Readline {
            reason: err.to_string(),
        })?;
        Ok(RustylineSource { editor })
    }
}

impl LineSource for RustylineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, BopError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(BopError::Readline {
                reason: err.to_string(),
            }),
        }
    }
}

/// An interactive session over one root directory.
pub struct Session<S: LineSource = RustylineSource> {
    source: S,
    fileset: FileSet,
    root: PathBuf,
}

impl Session<RustylineSource> {
    /// Open a session on `root` with the default line editor.
    ///
    /// # Errors
    ///
    /// Returns [`BopError::RootNotFound`] unless `root` is an existing
    /// directory, or [`BopError::Readline`] if the editor fails to start.
    pub fn new(root: impl Into<PathBuf>) -> Result<Session<RustylineSource>, BopError> {
        Session::with_source(root, RustylineSource::new()?)
    }
}

impl<S: LineSource> Session<S> {
    /// Open a session on `root` reading lines from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`BopError::RootNotFound`] unless `root` is an existing
    /// directory.
    pub fn with_source(root: impl Into<PathBuf>, source: S) -> Result<Session<S>, BopError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(BopError::RootNotFound {
                path: root.display().to_string(),
            });
        }
        Ok(Session {
            source,
            fileset: FileSet::new(),
            root,
        })
    }

    pub fn fileset(&self) -> &FileSet {
        &self.fileset
    }

    /// Run the read-refine-print loop until end of input or `!quit`.
    ///
    /// Syntax errors and unknown directives are reported on stderr and
    /// leave the selection untouched; only input failure is fatal.
    ///
    /// # Errors
    ///
    /// Returns [`BopError::Readline`] if reading input fails.
    pub fn run(&mut self) -> Result<(), BopError> {
        loop {
            let (files, folders) = self.counts();
            println!("{} files, {} folders", files, folders);

            let Some(line) = self.source.read_line("> ")? else {
                break;
            };
            if !self.handle_line(&line) {
                break;
            }
        }
        Ok(())
    }

    /// Process one input line. Returns `false` when the session should
    /// end.
    ///
    /// A blank line is a no-op. A directive line mutates the predicate
    /// stack (or reports an unknown directive). Any other line is parsed
    /// in full as predicate clauses before anything is appended, so a
    /// syntax error never half-applies a refinement.
    pub fn handle_line(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return true;
        }

        if let Some(directive) = line.strip_prefix(DIRECTIVE_MARKER) {
            return self.dispatch_directive(directive.trim());
        }

        match parse_predicates(&tokenize(line)) {
            Ok(filters) => {
                for filter in filters {
                    self.fileset.push(filter);
                }
            }
            Err(err) => eprintln!("error: {}", err),
        }
        true
    }

    /// Matching files and folders under the root right now.
    pub fn counts(&self) -> (u64, u64) {
        let mut files = 0u64;
        let mut folders = 0u64;
        for path in self.fileset.resolve(&self.root) {
            if path.is_dir() {
                folders += 1;
            } else {
                files += 1;
            }
        }
        (files, folders)
    }

    fn dispatch_directive(&mut self, directive: &str) -> bool {
        match directive {
            // Popping or clearing an already-empty stack is a quiet no-op.
            "pop" => {
                self.fileset.pop();
                true
            }
            "clear" => {
                self.fileset.clear();
                true
            }
            "quit" | "exit" => false,
            other => {
                eprintln!("error: unknown directive: {}{}", DIRECTIVE_MARKER, other);
                true
            }
        }
    }
}
