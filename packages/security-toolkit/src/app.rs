//! Launcher entry point shared by the binaries

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::BackendKind;
use crate::config::config_path;
use crate::controller::Controller;
use crate::registry::ToolRegistry;
use crate::terminal::TerminalConsole;

const EXIT_MESSAGE: &str = "Exiting Security Toolkit...";

#[derive(Parser, Debug)]
#[command(version, about = "Interactive menu for security tools")]
pub struct Args {
    /// Config file (default: ~/.security_toolkit/config.yml)
    #[arg(long, env = "SECURITY_TOOLKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Backend used to probe, run and install tools
    #[arg(long, env = "SECURITY_TOOLKIT_BACKEND", value_enum, default_value_t = BackendKind::Simulated)]
    pub backend: BackendKind,
}

/// Where a launcher opens the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    MainMenu,
    /// Straight into one category; leaving it exits
    Category(&'static str),
}

/// Parse arguments, run the menu, and map the outcome to an exit code:
/// 0 for quit or interrupt, 1 for anything unexpected.
pub async fn launch(entry: Entry) -> ExitCode {
    let args = Args::parse();
    init_logging();
    watch_interrupt();

    match run(args, entry).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_interrupt(&err) => {
            println!();
            println!("{}", style(EXIT_MESSAGE).yellow());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "menu aborted");
            println!("{}", style(format!("Error: {:#}", err)).red());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, entry: Entry) -> Result<()> {
    tracing::debug!(?entry, backend = ?args.backend, "starting");
    let path = config_path(args.config.as_deref());
    let mut controller = Controller::start(
        ToolRegistry::builtin(),
        path.as_deref(),
        args.backend.build(),
        TerminalConsole::new(),
    )
    .await;

    let result = match entry {
        Entry::MainMenu => controller.main_loop().await,
        Entry::Category(name) => controller.open_category(name).await,
    };
    controller.console().restore();
    result
}

/// Logs go to stderr so they never mix with the menu on stdout
fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Ctrl-C outside a prompt (during a run or install) ends the process cleanly.
/// Inside a prompt the terminal is in raw mode and the prompt itself reports
/// the interrupt, see [`is_interrupt`].
fn watch_interrupt() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = Term::stdout().show_cursor();
            println!();
            println!("{}", style(EXIT_MESSAGE).yellow());
            std::process::exit(0);
        }
    });
}

fn is_interrupt(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            return io_err.kind() == io::ErrorKind::Interrupted;
        }
        matches!(
            cause.downcast_ref::<dialoguer::Error>(),
            Some(dialoguer::Error::IO(io_err)) if io_err.kind() == io::ErrorKind::Interrupted
        )
    })
}
