//! Interpreter discovery.
//!
//! Finds a usable `java` executable without scanning the whole filesystem.
//! A fresh Windows install leaves java under Program Files but not reliably
//! on PATH, so the search probes a short, curated list of base directories in
//! order. Looping over per-base searches is much, much faster than one
//! recursive glob off the filesystem root; that bound is a requirement here,
//! not a tuning knob.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::env::{EnvLookup, Platform, SystemEnv};
use crate::error::{Error, Result};

/// Filenames probed in each PATH entry, in order.
const PATH_CANDIDATES: [&str; 3] = ["java.exe", "java.sh", "java"];

/// Environment variables naming the Program Files roots, 64-bit first.
const PROGRAM_FILES_VARS: [&str; 2] = ["ProgramW6432", "ProgramFiles(x86)"];

/// Locates a `java` executable from environment variables.
pub struct JavaLocator {
    env: Arc<dyn EnvLookup>,
    platform: Platform,
}

impl JavaLocator {
    /// Create a locator over an explicit environment and platform.
    pub fn new(env: Arc<dyn EnvLookup>, platform: Platform) -> Self {
        Self { env, platform }
    }

    /// Create a locator over the real process environment.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemEnv), Platform::current())
    }

    /// Find a java executable.
    ///
    /// Strategy, in order:
    /// 1. Windows-like only: `java/**/bin/java.exe` under the 64-bit then
    ///    32-bit Program Files roots (absent roots are skipped).
    /// 2. Each PATH entry, probed for `java.exe`, `java.sh`, `java`.
    /// 3. `$JAVA_HOME/bin/java`, returned without checking it exists. A stale
    ///    JAVA_HOME therefore surfaces at invocation time, not here.
    ///
    /// Fails with [`Error::JavaNotFound`] when all three come up empty.
    pub fn locate(&self) -> Result<PathBuf> {
        if self.platform == Platform::Windows {
            for var in PROGRAM_FILES_VARS {
                let Some(base) = self.env.var(var) else { continue };
                if let Some(found) = find_under_program_files(Path::new(&base)) {
                    tracing::debug!("found java under {}: {}", var, found.display());
                    return Ok(found);
                }
            }
        }

        if let Some(path_var) = self.env.var("PATH") {
            let separator = self.platform.path_separator();
            for entry in path_var.split(separator).filter(|e| !e.is_empty()) {
                if let Some(found) = first_file_match(Path::new(entry), &PATH_CANDIDATES) {
                    tracing::debug!("found java on PATH: {}", found.display());
                    return Ok(found);
                }
            }
        }

        match self.env.var("JAVA_HOME") {
            Some(home) => Ok(PathBuf::from(home).join("bin").join("java")),
            None => Err(Error::JavaNotFound),
        }
    }
}

/// First entry in `dir` matching one of `names` that is not a directory.
///
/// Names are tried in order. A missing `dir`, an unreadable entry, or a
/// directory that happens to carry a candidate name all count as "no match
/// here" and the caller moves on to its next base.
fn first_file_match(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| is_plain_file(candidate))
}

/// First `java/**/bin/java.exe` under `base` that is not a directory.
///
/// The walk is rooted at `<base>/java` so a nonexistent base is simply zero
/// matches. Entries are visited in filename order for determinism.
fn find_under_program_files(base: &Path) -> Option<PathBuf> {
    WalkDir::new(base.join("java"))
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry.file_name() == "java.exe"
                && entry.path().parent().and_then(Path::file_name).is_some_and(|p| p == "bin")
                && !entry.file_type().is_dir()
        })
        .map(|entry| entry.into_path())
}

/// lstat semantics: symlinks count as files, matching the original tool's
/// behavior for the common `/usr/bin/java` symlink.
fn is_plain_file(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok_and(|meta| !meta.is_dir())
}
