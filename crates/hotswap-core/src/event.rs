//! File-change events flowing through the swap stage.

use std::path::PathBuf;

/// One changed class file.
///
/// Produced by whatever feeds the stage (directory watcher, one-shot CLI),
/// read by the invoker, and forwarded downstream untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEvent {
    /// Absolute base directory the agent resolves class files against.
    pub base: PathBuf,

    /// Path of the changed file, relative to `base`.
    pub relative: PathBuf,

    /// The file no longer has content (deleted or truncated away); such
    /// events pass through without triggering a swap.
    pub deleted: bool,
}

impl ClassEvent {
    /// A changed-file event.
    pub fn changed(base: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            relative: relative.into(),
            deleted: false,
        }
    }

    /// A deletion marker for the same paths.
    pub fn deleted(base: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            relative: relative.into(),
            deleted: true,
        }
    }

    /// Bare file name, for log lines.
    pub fn file_name(&self) -> String {
        self.relative
            .file_name()
            .unwrap_or(self.relative.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

impl std::fmt::Display for ClassEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base.join(&self.relative).display())
    }
}
