//! Integration tests for directive file parsing.

use caddyext_directives::{DirectiveFormat, Error, parse};
use caddyext_test_utils::fixtures::{DIRECTIVES_GO, DIRECTIVES_GO_NAMES, PLAIN_DIRECTIVES_GO};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_entries_keep_file_order() {
    let model = parse(DIRECTIVES_GO, &DirectiveFormat::default()).unwrap();
    let names: Vec<&str> = model.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, DIRECTIVES_GO_NAMES.to_vec());
}

#[rstest]
#[case("root", true, true, Some("setup.Root"), None)]
#[case("tls", true, true, Some("https.Setup"), None)]
#[case("pprof", false, true, None, None)]
#[case("git", false, false, Some("git.Setup"), Some("github.com/abiosoft/caddy-git"))]
#[case("search", true, false, Some("search.Setup"), Some("github.com/pedronasser/caddy-search"))]
fn test_entry_flags(
    #[case] name: &str,
    #[case] active: bool,
    #[case] builtin: bool,
    #[case] setup: Option<&str>,
    #[case] source: Option<&str>,
) {
    let model = parse(DIRECTIVES_GO, &DirectiveFormat::default()).unwrap();
    let entry = model.entries().iter().find(|e| e.name == name).unwrap();

    assert_eq!(entry.active, active);
    assert_eq!(entry.builtin, builtin);
    assert_eq!(entry.setup.as_deref(), setup);
    assert_eq!(entry.source.as_deref(), source);
    assert!(!entry.removed);
}

#[test]
fn test_legacy_element_kept_verbatim() {
    let model = parse(DIRECTIVES_GO, &DirectiveFormat::default()).unwrap();
    assert_eq!(
        model.legacy_element("pprof"),
        Some("{\"!pprof\", func(c *setup.Controller) (middleware.Middleware, error) { return nil, nil }}")
    );
}

#[test]
fn test_markers_are_stripped_before_parsing() {
    let model = parse(DIRECTIVES_GO, &DirectiveFormat::default()).unwrap();
    assert!(!model.source().contains("//@caddyext"));
    assert!(model.disabled().contains("git"));
}

#[test]
fn test_single_import_declaration() {
    let model = parse(PLAIN_DIRECTIVES_GO, &DirectiveFormat::default()).unwrap();
    assert_eq!(model.imports().len(), 1);
    assert!(!model.imports()[0].grouped);
    assert!(model.group_closes().is_empty());
    assert!(model.entries().iter().all(|e| e.builtin && e.active));
}

#[test]
fn test_marker_forces_inactive_on_active_literal() {
    let raw = "package caddy\n\nimport \"github.com/mholt/caddy/caddy/setup\"\n\n\
               var directiveOrder = []directive{\n\
               \t{\"root\", setup.Root},\n\
               \t//@caddyext {\"gzip\", setup.Gzip},\n\
               }\n";
    let model = parse(raw, &DirectiveFormat::default()).unwrap();
    let gzip = model.entries().iter().find(|e| e.name == "gzip").unwrap();

    assert!(!gzip.active);
    assert!(gzip.builtin);
    assert_eq!(gzip.setup.as_deref(), Some("setup.Gzip"));
}

#[test]
fn test_custom_list_name() {
    let raw = "package caddy\n\nvar order = []directive{\n\t{\"root\", setup.Root},\n}\n";
    let format = DirectiveFormat::new("order", "//@caddyext").unwrap();

    let model = parse(raw, &format).unwrap();
    assert_eq!(model.entries().len(), 1);

    let err = parse(raw, &DirectiveFormat::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { .. }));
}

#[rstest]
#[case::not_go("this is not go source {")]
#[case::missing_list("package caddy\n\nvar other = []int{1}\n")]
#[case::not_a_literal("package caddy\n\nvar directiveOrder = loadDirectives()\n")]
#[case::no_package("var directiveOrder = []directive{}\n")]
fn test_invalid_files(#[case] raw: &str) {
    let err = parse(raw, &DirectiveFormat::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { .. }), "got {err:?}");
}

#[rstest]
#[case::number("{1, setup.Root}")]
#[case::single("{\"root\"}")]
#[case::three("{\"root\", setup.Root, setup.Log}")]
#[case::call("{\"root\", setup.Make(\"root\")}")]
#[case::bare_name("root")]
fn test_invalid_elements(#[case] element: &str) {
    let raw = format!("package caddy\n\nvar directiveOrder = []directive{{\n\t{element},\n}}\n");
    let err = parse(&raw, &DirectiveFormat::default()).unwrap_err();
    assert!(matches!(err, Error::ImportInvalidFormat { .. }), "got {err:?}");
}
