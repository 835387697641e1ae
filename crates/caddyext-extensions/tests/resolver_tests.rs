//! Integration tests for extension name resolution.

use caddyext_extensions::{Error, ExtensionCatalog, ExtensionResolver, FeedResolver};
use caddyext_test_utils::GoWorkspace;
use caddyext_test_utils::fixtures::REGISTRY_GO;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("search", Some("github.com/pedronasser/caddy-search"))]
#[case("git", Some("github.com/abiosoft/caddy-git"))]
#[case("unpublished", None)]
#[case("unknown", None)]
fn test_catalog_resolves(#[case] name: &str, #[case] expected: Option<&str>) {
    let catalog = ExtensionCatalog::parse_feed(REGISTRY_GO).unwrap();
    assert_eq!(catalog.resolve(name).unwrap().as_deref(), expected);
}

#[test]
fn test_catalog_lists_feed_names() {
    let catalog = ExtensionCatalog::parse_feed(REGISTRY_GO).unwrap();
    assert_eq!(
        catalog.known_extensions(),
        vec!["git", "search", "unpublished"]
    );
    assert!(catalog.contains("unpublished"));
    assert_eq!(catalog.get("unpublished").unwrap().source, "");
}

#[test]
fn test_feed_without_registry_list() {
    let err = ExtensionCatalog::parse_feed("package registry\n\nvar Other = []int{1}\n").unwrap_err();
    assert!(matches!(err, Error::InvalidFeed(_)));
}

#[test]
fn test_feed_with_syntax_error() {
    let err = ExtensionCatalog::parse_feed("package registry\n\nvar Registry = []extension{\n").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
}

#[test]
fn test_feed_resolver_reads_local_file() {
    let ws = GoWorkspace::new();
    let feed = ws.write("registry/registry.go", REGISTRY_GO);

    let resolver = FeedResolver::new(feed.to_string_lossy());
    assert_eq!(
        resolver.resolve("git").unwrap().as_deref(),
        Some("github.com/abiosoft/caddy-git")
    );
    assert_eq!(resolver.resolve("unpublished").unwrap(), None);
}

#[test]
fn test_feed_resolver_missing_file() {
    let ws = GoWorkspace::new();
    let missing = ws.root().join("nowhere.go");

    let resolver = FeedResolver::new(missing.to_string_lossy());
    assert!(matches!(resolver.resolve("git"), Err(Error::Fs(_))));
}
