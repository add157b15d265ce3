//! Directory watcher feeding the swap stage.
//!
//! Watches a class output tree and turns debounced filesystem notifications
//! into [`ClassEvent`]s, in arrival order.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use hotswap_core::{ClassEvent, Error, Result};
use notify_debouncer_mini::{DebounceEventResult, new_debouncer, notify::RecursiveMode};
use tokio::sync::mpsc;

/// Watcher handle over a class output directory.
pub struct ClassWatcher {
    /// Debouncer handle (kept alive to maintain the watcher).
    _debouncer: notify_debouncer_mini::Debouncer<notify::RecommendedWatcher>,
    /// Receiver for class events.
    rx: mpsc::UnboundedReceiver<ClassEvent>,
    /// Canonical base directory, the agent's `-Dpath`.
    base: PathBuf,
}

impl ClassWatcher {
    /// Watch `base` recursively for files with `extension`.
    ///
    /// A path that no longer exists when its notification fires becomes a
    /// deletion marker; the invoker forwards those without a swap.
    pub fn new(base: impl AsRef<Path>, extension: &str) -> Result<Self> {
        let base = base.as_ref().canonicalize()?;

        let (tx, rx) = mpsc::unbounded_channel();
        let extension = extension.to_string();
        let event_base = base.clone();

        let mut debouncer = new_debouncer(
            Duration::from_millis(200),
            move |result: DebounceEventResult| {
                if let Ok(events) = result {
                    for event in events {
                        let path = &event.path;

                        if path.extension().and_then(OsStr::to_str) != Some(extension.as_str()) {
                            continue;
                        }

                        // Notifications outside the canonical base (editor
                        // temp dirs, symlink detours) are not ours.
                        let Ok(relative) = path.strip_prefix(&event_base) else {
                            continue;
                        };

                        let class_event = if path.exists() {
                            ClassEvent::changed(event_base.clone(), relative)
                        } else {
                            ClassEvent::deleted(event_base.clone(), relative)
                        };

                        let _ = tx.send(class_event);
                    }
                }
            },
        )
        .map_err(|e| Error::Watch(e.to_string()))?;

        debouncer
            .watcher()
            .watch(&base, RecursiveMode::Recursive)
            .map_err(|e| Error::Watch(e.to_string()))?;

        Ok(Self {
            _debouncer: debouncer,
            rx,
            base,
        })
    }

    /// The canonical base directory being watched.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Receive the next class event.
    pub async fn recv(&mut self) -> Option<ClassEvent> {
        self.rx.recv().await
    }
}
