// File discovery honours ignore files and only returns Go sources.
use std::path::Path;

use ctxarg_parsers::walker::{FileWalker, WalkEntry, IGNORE_FILE_NAME};

use crate::common::create_project;

fn names(root: &Path, entries: &[WalkEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            e.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_ctxargignore_patterns() {
    let (_dir, root) = create_project(&[
        ("cmd/main.go", "package main"),
        ("internal/mock/mock.go", "package mock"),
        ("internal/svc/svc.go", "package svc"),
        ("internal/svc/svc_test.go", "package svc"),
        (IGNORE_FILE_NAME, "internal/mock/\n*_test.go\n"),
    ]);
    let entries = FileWalker::new(&root).walk();
    assert_eq!(names(&root, &entries), vec!["cmd/main.go", "internal/svc/svc.go"]);
}

#[test]
fn test_gitignore_without_git_repo() {
    let (_dir, root) = create_project(&[
        ("main.go", "package main"),
        ("build/out.go", "package build"),
        (".gitignore", "build/\n"),
    ]);
    let entries = FileWalker::new(&root).walk();
    assert_eq!(names(&root, &entries), vec!["main.go"]);
}

#[test]
fn test_only_go_files() {
    let (_dir, root) = create_project(&[
        ("main.go", "package main"),
        ("go.mod", "module x"),
        ("go.sum", ""),
        ("script.sh", "echo"),
    ]);
    let entries = FileWalker::new(&root).walk();
    assert_eq!(names(&root, &entries), vec!["main.go"]);
    assert!(entries.iter().all(|e| e.language == "go"));
}
