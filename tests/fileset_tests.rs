//! Filesystem behavior tests: filters against real metadata, FileSet
//! resolution, BatchOp actions, and the interactive session.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use batchop::error::BopError;
use batchop::filter::{Filter, SizeOp};
use batchop::parser::parse_command;
use batchop::session::{LineSource, Session};
use batchop::{BatchOp, FileSet};

/// Builds:
///
/// ```text
/// root/
///   empty.txt          (0 bytes)
///   notes.md           (5 bytes)
///   big.bin            (2000 bytes)
///   .hidden/
///     secret.txt
///   build/
///     out.log
///   sub/
///     vacant/          (empty dir)
/// ```
fn fixture() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let root = dir.path();
    fs::write(root.join("empty.txt"), b"").unwrap();
    fs::write(root.join("notes.md"), b"hello").unwrap();
    fs::write(root.join("big.bin"), vec![0u8; 2000]).unwrap();
    fs::create_dir(root.join(".hidden")).unwrap();
    fs::write(root.join(".hidden/secret.txt"), b"shh").unwrap();
    fs::create_dir(root.join("build")).unwrap();
    fs::write(root.join("build/out.log"), b"log").unwrap();
    fs::create_dir_all(root.join("sub/vacant")).unwrap();
    dir
}

// 9 entries total: 5 files, 4 directories (root excluded).
const TOTAL: u64 = 9;

fn run_op(dir: &TempDir, command: &str) -> BatchOp {
    let parsed = parse_command(command).expect("command parses");
    BatchOp::new(dir.path(), FileSet::from(parsed.filters)).expect("root exists")
}

#[test]
fn count_everything_counts_all_entries() {
    let dir = fixture();
    assert_eq!(run_op(&dir, "count everything").count(), TOTAL);
}

#[test]
fn empty_fileset_matches_everything() {
    let dir = fixture();
    let fileset = FileSet::new();
    assert_eq!(fileset.resolve(dir.path()).count() as u64, TOTAL);
}

#[test]
fn is_file_and_is_folder_partition_the_tree() {
    let dir = fixture();
    let files = run_op(&dir, "count files").count();
    let folders = run_op(&dir, "count folders").count();
    assert_eq!(files, 5);
    assert_eq!(folders, 4);
    assert_eq!(files + folders, TOTAL);
}

#[test]
fn is_empty_matches_zero_byte_files_and_bare_directories() {
    let dir = fixture();
    let root = dir.path();
    assert!(Filter::IsEmpty.test(&root.join("empty.txt"), root));
    assert!(Filter::IsEmpty.test(&root.join("sub/vacant"), root));
    assert!(!Filter::IsEmpty.test(&root.join("notes.md"), root));
    assert!(!Filter::IsEmpty.test(&root.join("sub"), root));
    assert!(!Filter::IsEmpty.test(&root.join("no-such-path"), root));
}

#[test]
fn is_hidden_checks_every_segment() {
    let dir = fixture();
    let root = dir.path();
    assert!(Filter::IsHidden.test(&root.join(".hidden"), root));
    assert!(Filter::IsHidden.test(&root.join(".hidden/secret.txt"), root));
    assert!(!Filter::IsHidden.test(&root.join("notes.md"), root));
    // A relative "." prefix is not a hidden segment.
    assert!(!Filter::IsHidden.test(Path::new("./visible/file.txt"), Path::new("")));
}

#[test]
fn is_hidden_ignores_segments_above_the_root() {
    // TempDir names start with a dot on many platforms, and the root's
    // own ancestors may contain dot segments too. Neither makes the
    // entries under the root hidden.
    let outer = TempDir::new().expect("create temp dir");
    let root = outer.path().join(".wrapped");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("plain.txt"), b"visible").unwrap();
    assert!(!Filter::IsHidden.test(&root.join("plain.txt"), &root));
    assert!(Filter::IsHidden.test(&root.join(".dotted"), &root));
}

#[test]
fn negated_is_logical_not_for_every_path() {
    let dir = fixture();
    let root = dir.path();
    let negated = Filter::negated(Filter::IsHidden);
    for path in FileSet::new().resolve(root) {
        assert_eq!(negated.test(&path, root), !Filter::IsHidden.test(&path, root));
    }
}

#[test]
fn is_named_matches_base_name_only() {
    let filter = Filter::named("*.md").unwrap();
    let dir = fixture();
    let root = dir.path();
    assert!(filter.test(&root.join("notes.md"), root));
    assert!(!filter.test(&root.join("big.bin"), root));

    // The glob does not see ancestor segments.
    let in_dir = Filter::named("build").unwrap();
    assert!(!in_dir.test(&root.join("build/out.log"), root));
    assert!(in_dir.test(&root.join("build"), root));
}

#[test]
fn is_in_matches_the_directory_itself_and_its_descendants() {
    let filter = Filter::in_dir("build").unwrap();
    let dir = fixture();
    let root = dir.path();
    assert!(filter.test(&root.join("build"), root));
    assert!(filter.test(&root.join("build/out.log"), root));
    assert!(!filter.test(&root.join("notes.md"), root));
    // A plain file named like the glob is not "in" it.
    fs::write(root.join("sub/build"), b"decoy").unwrap();
    assert!(!filter.test(&root.join("sub/build"), root));
}

#[test]
fn is_in_ignores_ancestors_at_or_above_the_root() {
    let dir = fixture();
    let root = dir.path();
    // Rooted inside build, its own name is no longer a containing segment.
    let inner_root = root.join("build");
    let filter = Filter::in_dir("build").unwrap();
    assert!(!filter.test(&inner_root.join("out.log"), &inner_root));
}

#[test]
fn size_compare_thresholds_are_in_bytes() {
    let dir = fixture();
    let root = dir.path();
    let big = root.join("big.bin");
    assert!(Filter::SizeCompare(SizeOp::Greater, 1_000).test(&big, root));
    assert!(!Filter::SizeCompare(SizeOp::Greater, 2_000).test(&big, root));
    assert!(Filter::SizeCompare(SizeOp::GreaterEq, 2_000).test(&big, root));
    assert!(Filter::SizeCompare(SizeOp::Less, 2_001).test(&big, root));
    assert!(!Filter::SizeCompare(SizeOp::LessEq, 1_999).test(&big, root));
    // Directories have no meaningful byte size.
    assert!(!Filter::SizeCompare(SizeOp::GreaterEq, 0).test(&root.join("sub"), root));
}

#[test]
fn has_extension_is_a_suffix_match() {
    let filter = Filter::extension("md");
    let dir = fixture();
    let root = dir.path();
    assert!(filter.test(&root.join("notes.md"), root));
    assert!(!filter.test(&root.join("big.bin"), root));
    assert_eq!(
        format!("{:?}", Filter::extension(".MD")),
        format!("{:?}", Filter::extension("md"))
    );
}

#[test]
fn fileset_is_an_and_combination() {
    let dir = fixture();
    let op = run_op(&dir, "list files that are not hidden that are empty");
    let paths = op.list();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].file_name().unwrap(), "empty.txt");
}

#[test]
fn count_detailed_splits_files_and_folders() {
    let dir = fixture();
    let op = run_op(&dir, "count anything in build");
    let (files, folders) = op.count_detailed();
    assert_eq!(files, 1); // out.log
    assert_eq!(folders, 1); // build itself
}

#[test]
fn batchop_rejects_missing_root() {
    let result = BatchOp::new("/no/such/root/anywhere", FileSet::new());
    assert!(matches!(result, Err(BopError::RootNotFound { .. })));
}

#[test]
fn delete_with_counts_without_destroying() {
    let dir = fixture();
    let op = run_op(&dir, "delete files that are empty");
    let mut seen: Vec<PathBuf> = Vec::new();
    let removed = op
        .delete_with(|path| {
            seen.push(path.to_path_buf());
            Ok(())
        })
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(seen.len(), 1);
    // Nothing was actually removed.
    assert!(dir.path().join("empty.txt").exists());
}

#[test]
fn delete_removes_matching_entries() {
    let dir = fixture();
    let op = run_op(&dir, "delete folders that are empty");
    let removed = op.delete().unwrap();
    assert_eq!(removed, 1);
    assert!(!dir.path().join("sub/vacant").exists());
    assert!(dir.path().join("sub").exists());
}

#[test]
fn delete_propagates_remover_failure() {
    let dir = fixture();
    let op = run_op(&dir, "delete files");
    let result = op.delete_with(|path| {
        Err(BopError::DeleteFailed {
            path: path.display().to_string(),
            reason: "refused".to_string(),
        })
    });
    assert!(matches!(result, Err(BopError::DeleteFailed { .. })));
}

/// Scripted line source for session tests.
struct Script {
    lines: std::vec::IntoIter<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Script {
        Script {
            lines: lines
                .iter()
                .map(|line| line.to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineSource for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, BopError> {
        Ok(self.lines.next())
    }
}

#[test]
fn session_refines_pops_and_clears() {
    let dir = fixture();
    let mut session = Session::with_source(dir.path(), Script::new(&[])).unwrap();

    assert!(session.handle_line("is a file"));
    assert_eq!(session.fileset().len(), 1);

    assert!(session.handle_line("!pop"));
    assert_eq!(session.fileset().len(), 0);

    // Clearing an already-empty set is a quiet no-op.
    assert!(session.handle_line("!clear"));
    assert_eq!(session.fileset().len(), 0);
}

#[test]
fn session_syntax_error_leaves_the_set_untouched() {
    let dir = fixture();
    let mut session = Session::with_source(dir.path(), Script::new(&[])).unwrap();
    assert!(session.handle_line("is a file"));

    // The valid leading clause must not be applied when the tail fails.
    assert!(session.handle_line("is empty gibberish"));
    assert_eq!(session.fileset().len(), 1);
}

#[test]
fn session_counts_track_refinement() {
    let dir = fixture();
    let mut session = Session::with_source(dir.path(), Script::new(&[])).unwrap();
    assert_eq!(session.counts(), (5, 4));

    session.handle_line("is a file");
    assert_eq!(session.counts(), (5, 0));

    session.handle_line("not hidden");
    assert_eq!(session.counts(), (4, 0));
}

#[test]
fn session_run_consumes_the_script_until_eof() {
    let dir = fixture();
    let script = Script::new(&["is a file", "", "!bogus", "ends with .md", "!pop"]);
    let mut session = Session::with_source(dir.path(), script).unwrap();
    session.run().unwrap();
    // `is a file` survives; `ends with .md` was popped.
    assert_eq!(session.fileset().len(), 1);
}

#[test]
fn session_quit_directive_ends_the_loop_early() {
    let dir = fixture();
    let script = Script::new(&["is a file", "!quit", "is empty"]);
    let mut session = Session::with_source(dir.path(), script).unwrap();
    session.run().unwrap();
    assert_eq!(session.fileset().len(), 1);
}
