//! Go source fixtures.

/// A directives file shaped like Caddy's `caddy/directives.go`.
///
/// Contents, in order:
/// `root bind tls startup shutdown pprof log gzip git search errors`
///
/// - `pprof` is a builtin disabled through the legacy placeholder form.
/// - `git` is a third-party extension disabled with the marker comment.
/// - `search` is an active third-party extension.
pub const DIRECTIVES_GO: &str = r#"package caddy

import (
	"github.com/mholt/caddy/caddy/https"
	"github.com/mholt/caddy/caddy/parse"
	"github.com/mholt/caddy/caddy/setup"
	"github.com/mholt/caddy/middleware"
	//@caddyext git "github.com/abiosoft/caddy-git"
	search "github.com/pedronasser/caddy-search"
)

func init() {
	// The parse package must know which directives
	// are valid, but it must not import the setup
	// or config package.
	for _, dir := range directiveOrder {
		parse.ValidDirectives[dir.name] = struct{}{}
	}
}

// Directives are registered in the order they should be
// executed. Ordering is VERY important.
var directiveOrder = []directive{
	// Essential directives that initialize vital configuration settings
	{"root", setup.Root},
	{"bind", setup.BindHost},
	{"tls", https.Setup},

	// Other directives that don't create HTTP handlers
	{"startup", setup.Startup},
	{"shutdown", setup.Shutdown},
	{"!pprof", func(c *setup.Controller) (middleware.Middleware, error) { return nil, nil }},

	// Directives that inject handlers (middleware)
	{"log", setup.Log},
	{"gzip", setup.Gzip},
	//@caddyext {"git", git.Setup},
	{"search", search.Setup},
	{"errors", setup.Errors},
}

// directive ties together a directive name with its setup function.
type directive struct {
	name  string
	setup SetupFunc
}

// SetupFunc takes a controller and may optionally return a middleware.
type SetupFunc func(c *setup.Controller) (middleware.Middleware, error)
"#;

/// A minimal directives file with only builtin entries and no imports of
/// third-party extensions.
pub const PLAIN_DIRECTIVES_GO: &str = r#"package caddy

import "github.com/mholt/caddy/caddy/setup"

var directiveOrder = []directive{
	{"root", setup.Root},
	{"log", setup.Log},
	{"gzip", setup.Gzip},
	{"errors", setup.Errors},
	{"browse", setup.Browse},
}
"#;

/// Names in [`DIRECTIVES_GO`], in list order.
pub const DIRECTIVES_GO_NAMES: [&str; 11] = [
    "root", "bind", "tls", "startup", "shutdown", "pprof", "log", "gzip", "git", "search",
    "errors",
];

/// A registry feed mapping extension names to repositories.
pub const REGISTRY_GO: &str = r#"package registry

// Registry lists the extensions known to caddyext.
var Registry = []extension{
	{"search", "github.com/pedronasser/caddy-search"},
	{"git", "github.com/abiosoft/caddy-git"},
	{"unpublished", ""},
}
"#;
