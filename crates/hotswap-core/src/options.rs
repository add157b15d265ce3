//! Construction options for the swap invoker.

use std::path::PathBuf;

/// User-supplied options, merged with defaults.
///
/// All fields are fixed once the invoker is constructed. The port is kept as
/// a string because it is only ever spliced into a `-Dport=` argument.
#[derive(Debug, Clone)]
pub struct SwapOptions {
    /// Host the target JVM is listening on.
    pub host: String,

    /// Port the target JVM is listening on.
    pub port: String,

    /// Emit diagnostic lines and include subprocess stdout in failure logs.
    pub debug: bool,

    /// Interpreter path override; discovered when unset.
    pub java: Option<PathBuf>,

    /// Agent jar override; defaults to `hotswap.jar` next to the current
    /// executable.
    pub agent_jar: Option<PathBuf>,
}

impl Default for SwapOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: "9000".to_string(),
            debug: false,
            java: None,
            agent_jar: None,
        }
    }
}
