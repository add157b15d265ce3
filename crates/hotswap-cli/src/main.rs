//! hotswap CLI - hot swap JVM classes over a socket when class files change.

mod swap;
mod watch;
mod watcher;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hotswap_core::{JavaLocator, SwapOptions};

#[derive(Parser)]
#[command(name = "hotswap")]
#[command(about = "Hot swap JVM classes over a socket when class files change")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable diagnostic logging (and include agent output in failure logs)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a class directory and hot swap files as they change
    Watch {
        /// Base directory the agent resolves class files against
        dir: String,

        /// File extension to react to
        #[arg(long, default_value = "class")]
        ext: String,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Hot swap the given files once
    Swap {
        /// Base directory the agent resolves class files against
        base: String,

        /// Changed files, relative to the base directory
        #[arg(required = true)]
        files: Vec<String>,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Print the discovered java executable
    Locate,
}

/// Options shared by the swapping subcommands.
#[derive(Args)]
struct ConnectionArgs {
    /// Host the target JVM listens on
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port the target JVM listens on
    #[arg(long, default_value = "9000")]
    port: String,

    /// Path to the java executable (skips discovery)
    #[arg(long)]
    java: Option<PathBuf>,

    /// Path to the hot-swap agent jar (default: hotswap.jar next to this binary)
    #[arg(long)]
    jar: Option<PathBuf>,
}

impl ConnectionArgs {
    fn into_options(self, debug: bool) -> SwapOptions {
        SwapOptions {
            host: self.host,
            port: self.port,
            debug,
            java: self.java,
            agent_jar: self.jar,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Swap outcomes are INFO lines; --debug adds the
    // per-invocation diagnostics.
    let filter = if cli.debug {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Watch {
            dir,
            ext,
            connection,
        } => {
            watch::execute(&dir, &ext, connection.into_options(cli.debug)).await?;
        }

        Commands::Swap {
            base,
            files,
            connection,
        } => {
            swap::execute(&base, &files, connection.into_options(cli.debug))?;
        }

        Commands::Locate => {
            let java = JavaLocator::system().locate()?;
            println!("{}", java.display());
        }
    }

    Ok(())
}
