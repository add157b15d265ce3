//! Swap invocation.
//!
//! Translates one file-change event into exactly one blocking call of the
//! hot-swap agent, then reports the outcome and hands the event back
//! untouched. The agent speaks its own protocol to the JVM; all this side
//! sees is an exit code.
//!
//! Typical hot-swap caveats apply:
//! * the agent can't connect if another debugger is already attached
//! * classes whose method signatures changed won't swap

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::env::{Platform, SystemEnv};
use crate::error::Result;
use crate::event::ClassEvent;
use crate::locate::JavaLocator;
use crate::options::SwapOptions;

/// Conventional process exit code: 0 is success, anything above is failure.
pub type ExitCode = i32;

/// Outcome of one agent subprocess call.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Exit code of the agent process.
    pub exit_code: ExitCode,

    /// Captured standard output, shown in failure logs under `debug`.
    pub stdout: String,
}

impl Invocation {
    /// Anything but a clean zero exit is a failed swap, including the
    /// synthesized code for a signal-killed agent.
    pub fn is_failure(&self) -> bool {
        self.exit_code != 0
    }
}

/// Runs one command line to completion, blocking.
///
/// A trait so tests can count invocations and script exit codes.
pub trait CommandRunner: Send + Sync {
    /// Run `command` and wait for it. `Err` means the process never started.
    fn run(&self, command: &str) -> std::io::Result<Invocation>;
}

/// Production runner: hands the command line to the platform shell.
///
/// The command embeds a quoted interpreter path, so it has to go through a
/// shell rather than straight argv splitting.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> std::io::Result<Invocation> {
        let output = if cfg!(windows) {
            Command::new("cmd").args(["/C", command]).output()?
        } else {
            Command::new("sh").args(["-c", command]).output()?
        };

        Ok(Invocation {
            // Killed-by-signal has no code; treat it as failure.
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Per-event hot-swap stage.
///
/// Constructed once (interpreter discovery runs at most once, here), then
/// [`handle`](Self::handle) is called for every file event. Events pass
/// through unchanged; a failed swap is logged, never propagated.
pub struct SwapInvoker {
    /// `"<java>" -Dhost=<host> -Dport=<port>`, built once.
    base_command: String,
    agent_jar: PathBuf,
    host: String,
    port: String,
    debug: bool,
    runner: Box<dyn CommandRunner>,
}

impl std::fmt::Debug for SwapInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapInvoker")
            .field("base_command", &self.base_command)
            .field("agent_jar", &self.agent_jar)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl SwapInvoker {
    /// Build an invoker from options, discovering java from the real
    /// environment when no override is given.
    pub fn new(options: SwapOptions) -> Result<Self> {
        let locator = JavaLocator::new(std::sync::Arc::new(SystemEnv), Platform::current());
        Self::with_parts(options, &locator, Box::new(ShellRunner))
    }

    /// Build an invoker with an explicit locator and runner.
    pub fn with_parts(
        options: SwapOptions,
        locator: &JavaLocator,
        runner: Box<dyn CommandRunner>,
    ) -> Result<Self> {
        let java = match options.java {
            Some(path) => path,
            None => locator.locate()?,
        };

        let agent_jar = match options.agent_jar {
            Some(path) => path,
            None => default_agent_jar()?,
        };

        if options.debug {
            tracing::debug!("using java at \"{}\"", java.display());
        }

        // Quote the interpreter path; Program Files installs have spaces.
        let base_command = format!(
            "\"{}\" -Dhost={} -Dport={}",
            java.display(),
            options.host,
            options.port
        );

        Ok(Self {
            base_command,
            agent_jar,
            host: options.host,
            port: options.port,
            debug: options.debug,
            runner,
        })
    }

    /// The exact command line one event produces.
    ///
    /// TODO: the agent accepts multiple file arguments relative to the base
    /// path, so a batching stage could fold consecutive events into one call.
    pub fn command_line(&self, event: &ClassEvent) -> String {
        format!(
            "{} -Dpath={} -jar {} {}",
            self.base_command,
            event.base.display(),
            self.agent_jar.display(),
            event.relative.display()
        )
    }

    /// Process one event: at most one blocking agent call, then forward the
    /// event unchanged.
    ///
    /// Deletion markers pass straight through with no side effects. A
    /// non-zero exit (or a process that failed to start) is logged and
    /// swallowed; the stream must keep flowing.
    pub fn handle(&self, event: ClassEvent) -> ClassEvent {
        if event.deleted {
            return event;
        }

        let file_name = event.file_name();
        if self.debug {
            tracing::debug!(
                "attempting to hot swap {} on {}:{}",
                file_name,
                self.host,
                self.port
            );
        }

        let command = self.command_line(&event);
        match self.runner.run(&command) {
            Ok(result) if result.is_failure() => {
                if self.debug {
                    tracing::error!(
                        "hot swap failed for {} with exit code {}\n\n{}",
                        file_name,
                        result.exit_code,
                        result.stdout
                    );
                } else {
                    tracing::error!(
                        "hot swap failed for {} with exit code {}",
                        file_name,
                        result.exit_code
                    );
                }
            }
            Ok(_) => {
                tracing::info!("hot swap successful for {}", file_name);
            }
            Err(e) => {
                tracing::error!("hot swap failed for {}: {}", file_name, e);
            }
        }

        event
    }
}

/// The bundled agent artifact lives next to the current executable.
fn default_agent_jar() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().unwrap_or(Path::new(".")).join("hotswap.jar"))
}
