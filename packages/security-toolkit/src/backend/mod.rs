// Tool backends
//
// The menu never touches tools directly. Presence checks, launching,
// installing and updating all go through a `ToolBackend` chosen at startup.

mod process;
mod simulated;

pub use process::ProcessBackend;
pub use simulated::SimulatedBackend;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::BackendError;

#[async_trait]
pub trait ToolBackend: Send + Sync {
    /// Short name shown in logs
    fn name(&self) -> &'static str;

    /// Whether running a tool takes over the terminal.
    /// The controller skips its spinner for such backends.
    fn attaches_terminal(&self) -> bool {
        false
    }

    /// Report whether `tool` is currently installed
    async fn is_installed(&self, tool: &str) -> bool;

    /// Run `tool` and wait for it to finish
    async fn run(&self, tool: &str) -> Result<(), BackendError>;

    /// Install `tool`
    async fn install(&self, tool: &str) -> Result<(), BackendError>;

    /// Refresh or upgrade `tool`
    async fn update(&self, tool: &str) -> Result<(), BackendError> {
        // Default: nothing to refresh
        let _ = tool;
        Ok(())
    }
}

/// Backends selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BackendKind {
    /// Reports every tool as installed, fakes runs with a short delay
    #[default]
    Simulated,
    /// Probes PATH and launches the real binaries
    Process,
}

impl BackendKind {
    pub fn build(self) -> Arc<dyn ToolBackend> {
        match self {
            BackendKind::Simulated => Arc::new(SimulatedBackend::new()),
            BackendKind::Process => Arc::new(ProcessBackend::new()),
        }
    }
}
