//! Filesystem predicates.
//!
//! A [`Filter`] tests one path against one condition. Filters are pure
//! over path metadata: they stat the filesystem on demand, never cache,
//! and never fail. A path whose metadata cannot be read simply does not
//! match.

use std::fs;
use std::path::{Component, Path};

use globset::{Glob, GlobMatcher};

use crate::error::BopError;

/// Comparison operator for size predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeOp {
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

impl SizeOp {
    /// Apply the comparison to a file size in bytes.
    pub fn compare(self, size: u64, threshold: u64) -> bool {
        match self {
            SizeOp::Greater => size > threshold,
            SizeOp::GreaterEq => size >= threshold,
            SizeOp::Less => size < threshold,
            SizeOp::LessEq => size <= threshold,
        }
    }
}

/// A single predicate over a filesystem path.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Path is a regular file.
    IsFile,
    /// Path is a directory.
    IsFolder,
    /// Path is a zero-entry directory or a zero-byte regular file.
    IsEmpty,
    /// Base name matches a shell glob.
    IsNamed(GlobMatcher),
    /// Path is a directory whose base name matches the glob, or any
    /// ancestor segment below the root matches it.
    IsIn(GlobMatcher),
    /// Any path segment below the root begins with `.`.
    IsHidden,
    /// File size compares against a byte threshold.
    SizeCompare(SizeOp, u64),
    /// File name ends with the given extension (leading `.` included).
    HasExtension(String),
    /// Logical NOT of the inner filter.
    Negated(Box<Filter>),
}

impl Filter {
    /// Base-name glob filter.
    ///
    /// # Errors
    ///
    /// Returns [`BopError::BadPattern`] if `pattern` is not a valid glob.
    pub fn named(pattern: &str) -> Result<Filter, BopError> {
        Ok(Filter::IsNamed(compile_glob(pattern)?))
    }

    /// Containing-directory glob filter.
    ///
    /// # Errors
    ///
    /// Returns [`BopError::BadPattern`] if `pattern` is not a valid glob.
    pub fn in_dir(pattern: &str) -> Result<Filter, BopError> {
        Ok(Filter::IsIn(compile_glob(pattern)?))
    }

    /// Extension filter. The extension is lower-cased and a leading `.`
    /// is added when the caller omits it, so `md` and `.md` are the same
    /// filter.
    pub fn extension(ext: &str) -> Filter {
        let ext = ext.to_lowercase();
        let ext = if ext.starts_with('.') {
            ext
        } else {
            format!(".{}", ext)
        };
        Filter::HasExtension(ext)
    }

    /// Wrap a filter in logical negation.
    pub fn negated(inner: Filter) -> Filter {
        Filter::Negated(Box::new(inner))
    }

    /// Test this predicate against one path resolved under `root`.
    ///
    /// Metadata checks stat `path` as given; segment checks (`IsHidden`,
    /// `IsIn`) only see the part of the path below `root`, so a session
    /// rooted inside a dot-directory does not classify everything as
    /// hidden. A `path` outside `root` is examined whole.
    pub fn test(&self, path: &Path, root: &Path) -> bool {
        match self {
            Filter::IsFile => path.is_file(),
            Filter::IsFolder => path.is_dir(),
            Filter::IsEmpty => {
                if path.is_dir() {
                    fs::read_dir(path)
                        .map(|mut entries| entries.next().is_none())
                        .unwrap_or(false)
                } else {
                    path.metadata()
                        .map(|meta| meta.is_file() && meta.len() == 0)
                        .unwrap_or(false)
                }
            }
            Filter::IsNamed(glob) => base_name(path).is_some_and(|name| glob.is_match(name)),
            Filter::IsIn(glob) => {
                let matches_self =
                    path.is_dir() && base_name(path).is_some_and(|name| glob.is_match(name));
                matches_self
                    || ancestor_segments(relative_to(path, root))
                        .any(|segment| glob.is_match(segment))
            }
            Filter::IsHidden => {
                relative_to(path, root)
                    .components()
                    .any(|component| match component {
                        Component::Normal(segment) => segment.to_string_lossy().starts_with('.'),
                        _ => false,
                    })
            }
            Filter::SizeCompare(op, threshold) => path
                .metadata()
                .map(|meta| meta.is_file() && op.compare(meta.len(), *threshold))
                .unwrap_or(false),
            Filter::HasExtension(ext) => {
                base_name(path).is_some_and(|name| name.to_lowercase().ends_with(ext.as_str()))
            }
            Filter::Negated(inner) => !inner.test(path, root),
        }
    }
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, BopError> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|err| BopError::BadPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// View of `path` below `root`. Segments at or above the resolution root
/// never participate in segment checks; when `path` is not under `root`,
/// the whole path is used.
fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// Path segments above the base name, nearest last. Prefix components
/// (`/`, `.`, `..`) are not segments.
fn ancestor_segments(path: &Path) -> impl Iterator<Item = String> + '_ {
    path.parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
}
