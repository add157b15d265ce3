//! Watch command implementation.
//!
//! Watches a class output directory and hot swaps each changed file against
//! the running JVM, one at a time.

use hotswap_core::{SwapInvoker, SwapOptions};

use crate::watcher::ClassWatcher;

/// Execute the watch command.
pub async fn execute(dir: &str, extension: &str, options: SwapOptions) -> anyhow::Result<()> {
    let host = options.host.clone();
    let port = options.port.clone();

    // Discovery runs here, once; a missing interpreter aborts setup.
    let invoker = SwapInvoker::new(options)?;
    let mut watcher = ClassWatcher::new(dir, extension)?;

    println!(
        "Watching {} - swapping on {}:{} (Ctrl+C to stop)",
        watcher.base().display(),
        host,
        port
    );

    // Strictly serial: each swap blocks until the agent exits before the
    // next event is taken. A hung agent hangs the loop; that is the
    // contract, there is no timeout.
    while let Some(event) = watcher.recv().await {
        invoker.handle(event);
    }

    Ok(())
}
