//! Core engine for the hotswap build-pipeline helper.
//!
//! This crate provides:
//! - Interpreter discovery: a bounded, platform-aware search for a usable
//!   `java` executable (Program Files glob, PATH probe, `JAVA_HOME` fallback)
//! - Swap invocation: one blocking agent subprocess call per file-change
//!   event, with log-and-forward semantics
//!
//! Events are never filtered or mutated; the invoker is a pass-through stage
//! whose only outputs are subprocess calls and log lines.

pub mod env;
pub mod error;
pub mod event;
pub mod invoke;
pub mod locate;
pub mod options;

pub use env::{EnvLookup, Platform, SystemEnv};
pub use error::{Error, Result};
pub use event::ClassEvent;
pub use invoke::{CommandRunner, ExitCode, Invocation, ShellRunner, SwapInvoker};
pub use locate::JavaLocator;
pub use options::SwapOptions;
