//! Integration tests for host source location.

use caddyext_fs::{GoPath, HostLocator, SourceLocator};
use caddyext_test_utils::workspace::{HOST_PROJECT, MANAGED_FILE};
use caddyext_test_utils::{GoWorkspace, fixtures};
use std::path::PathBuf;

fn locator_for(roots: Vec<PathBuf>) -> HostLocator {
    HostLocator::new(GoPath::new(roots), MANAGED_FILE)
}

#[test]
fn test_locates_host_in_gopath() {
    let ws = GoWorkspace::new();
    let file = ws.with_host(fixtures::DIRECTIVES_GO);

    let found = locator_for(vec![ws.root().to_path_buf()])
        .locate(HOST_PROJECT)
        .unwrap();

    assert_eq!(canonical(&found), canonical(&file));
}

#[test]
fn test_first_matching_root_wins() {
    let first = GoWorkspace::new();
    let second = GoWorkspace::new();
    second.with_host(fixtures::DIRECTIVES_GO);
    let expected = first.with_host(fixtures::PLAIN_DIRECTIVES_GO);

    let found = locator_for(vec![
        first.root().to_path_buf(),
        second.root().to_path_buf(),
    ])
    .locate(HOST_PROJECT)
    .unwrap();

    assert_eq!(canonical(&found), canonical(&expected));
}

#[test]
fn test_skips_roots_without_host() {
    let empty = GoWorkspace::new();
    let ws = GoWorkspace::new();
    let expected = ws.with_host(fixtures::DIRECTIVES_GO);

    let found = locator_for(vec![empty.root().to_path_buf(), ws.root().to_path_buf()])
        .locate(HOST_PROJECT)
        .unwrap();

    assert_eq!(canonical(&found), canonical(&expected));
}

#[test]
fn test_missing_host_is_none() {
    let ws = GoWorkspace::new();
    assert!(
        locator_for(vec![ws.root().to_path_buf()])
            .locate(HOST_PROJECT)
            .is_none()
    );
}

#[test]
fn test_absolute_project_path() {
    let ws = GoWorkspace::new();
    let expected = ws.with_host(fixtures::DIRECTIVES_GO);
    let project_root = ws.src().join(HOST_PROJECT);

    let found = locator_for(Vec::new())
        .locate(project_root.to_str().unwrap())
        .unwrap();

    assert_eq!(canonical(&found), canonical(&expected));
}

#[test]
fn test_find_package() {
    let ws = GoWorkspace::new();
    let dir = ws.add_package("github.com/pedronasser/caddy-search");
    let gopath = GoPath::new([ws.root().to_path_buf()]);

    assert_eq!(
        gopath.find_package("github.com/pedronasser/caddy-search"),
        Some(dir)
    );
    assert!(gopath.find_package("github.com/nobody/nothing").is_none());
}

/// Canonical form for comparison (temp dirs may sit behind symlinks).
fn canonical(path: &std::path::Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap()
}
