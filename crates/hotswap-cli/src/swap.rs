//! One-shot swap command implementation.

use std::path::Path;

use hotswap_core::{ClassEvent, SwapInvoker, SwapOptions};

/// Execute the swap command: one invocation per file, in argument order.
pub fn execute(base: &str, files: &[String], options: SwapOptions) -> anyhow::Result<()> {
    let base = Path::new(base)
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("base directory {}: {}", base, e))?;

    let invoker = SwapInvoker::new(options)?;

    for file in files {
        invoker.handle(ClassEvent::changed(base.clone(), file));
    }

    Ok(())
}
