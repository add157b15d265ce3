//! Process-environment access behind an injectable port.
//!
//! Interpreter discovery is driven entirely by environment variables, so the
//! lookup is a trait: production code reads the real process environment,
//! tests supply a map without mutating global state.

use std::collections::HashMap;

/// Read-only lookup of environment variables.
pub trait EnvLookup: Send + Sync {
    /// Value of `key`, or `None` when unset (or not valid unicode).
    fn var(&self, key: &str) -> Option<String>;
}

/// Production lookup against the real process environment.
pub struct SystemEnv;

impl EnvLookup for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Platform flavor relevant to interpreter discovery.
///
/// Carried explicitly (rather than `cfg!`-gated inline) so the Windows
/// search order is testable on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows-like: java installs live under Program Files, PATH splits on `;`.
    Windows,
    /// Everything else: PATH splits on `:`.
    Unix,
}

impl Platform {
    /// The platform this process is running on.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Separator between entries of the PATH variable.
    pub fn path_separator(&self) -> char {
        match self {
            Platform::Windows => ';',
            Platform::Unix => ':',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lookup() {
        let mut env = HashMap::new();
        env.insert("JAVA_HOME".to_string(), "/opt/java".to_string());

        assert_eq!(env.var("JAVA_HOME").as_deref(), Some("/opt/java"));
        assert_eq!(env.var("PATH"), None);
    }

    #[test]
    fn path_separators() {
        assert_eq!(Platform::Windows.path_separator(), ';');
        assert_eq!(Platform::Unix.path_separator(), ':');
    }
}
