//! Fetching extension sources with the Go toolchain.

use std::process::Command;

use crate::error::{Error, Result};

/// Makes the source for an import path available locally.
pub trait SourceFetcher {
    fn fetch(&self, location: &str, update: bool) -> Result<()>;
}

/// Runs `go get [-u] <location>`.
#[derive(Debug, Clone)]
pub struct GoGetFetcher {
    go_binary: String,
}

impl Default for GoGetFetcher {
    fn default() -> Self {
        Self::new("go")
    }
}

impl GoGetFetcher {
    pub fn new(go_binary: impl Into<String>) -> Self {
        Self {
            go_binary: go_binary.into(),
        }
    }

    /// The command [`SourceFetcher::fetch`] would run.
    pub fn command(&self, location: &str, update: bool) -> Command {
        let mut cmd = Command::new(&self.go_binary);
        cmd.arg("get");
        if update {
            cmd.arg("-u");
        }
        cmd.arg(location);
        cmd
    }
}

impl SourceFetcher for GoGetFetcher {
    fn fetch(&self, location: &str, update: bool) -> Result<()> {
        tracing::debug!(location, update, go = %self.go_binary, "fetching extension source");

        let failed = |reason: String| Error::FetchFailed {
            location: location.to_string(),
            reason,
        };
        let output = self
            .command(location, update)
            .output()
            .map_err(|e| failed(format!("could not run `{}`: {e}", self.go_binary)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = match output.status.code() {
                Some(code) if stderr.is_empty() => format!("exit code {code}"),
                Some(code) => format!("exit code {code}: {stderr}"),
                None => "terminated by signal".to_string(),
            };
            return Err(failed(reason));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_command_without_update() {
        let fetcher = GoGetFetcher::default();
        let cmd = fetcher.command("github.com/abiosoft/caddy-git", false);
        assert_eq!(cmd.get_program(), "go");
        assert_eq!(args(&cmd), vec!["get", "github.com/abiosoft/caddy-git"]);
    }

    #[test]
    fn test_command_with_update() {
        let fetcher = GoGetFetcher::new("/usr/local/go/bin/go");
        let cmd = fetcher.command("github.com/abiosoft/caddy-git", true);
        assert_eq!(args(&cmd), vec!["get", "-u", "github.com/abiosoft/caddy-git"]);
    }

    #[test]
    fn test_missing_binary_fails() {
        let fetcher = GoGetFetcher::new("caddyext-no-such-go-binary");
        let err = fetcher.fetch("github.com/x/y", false).unwrap_err();
        assert!(matches!(err, Error::FetchFailed { location, .. } if location == "github.com/x/y"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_checked() {
        assert!(GoGetFetcher::new("true").fetch("github.com/x/y", true).is_ok());
        assert!(matches!(
            GoGetFetcher::new("false").fetch("github.com/x/y", false),
            Err(Error::FetchFailed { .. })
        ));
    }
}
