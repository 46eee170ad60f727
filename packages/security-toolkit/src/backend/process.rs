use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use which::which;

use super::ToolBackend;
use crate::error::BackendError;

/// Backend that looks tools up on PATH and launches the real binaries.
///
/// There is no installation policy, so `install` and `update` always report
/// that no installer is configured.
#[derive(Debug, Clone, Default)]
pub struct ProcessBackend;

impl ProcessBackend {
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, tool: &str) -> Result<PathBuf, BackendError> {
        which(tool).map_err(|_| BackendError::NotFound(tool.to_string()))
    }
}

#[async_trait]
impl ToolBackend for ProcessBackend {
    fn name(&self) -> &'static str {
        "process"
    }

    fn attaches_terminal(&self) -> bool {
        true
    }

    async fn is_installed(&self, tool: &str) -> bool {
        self.resolve(tool).is_ok()
    }

    async fn run(&self, tool: &str) -> Result<(), BackendError> {
        let program = self.resolve(tool)?;
        tracing::info!(tool, program = %program.display(), "launching tool");

        let status = Command::new(&program)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| BackendError::Spawn {
                tool: tool.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(BackendError::ExitStatus {
                tool: tool.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }

    async fn install(&self, tool: &str) -> Result<(), BackendError> {
        Err(BackendError::NoInstaller(tool.to_string()))
    }

    async fn update(&self, tool: &str) -> Result<(), BackendError> {
        Err(BackendError::NoInstaller(tool.to_string()))
    }
}
