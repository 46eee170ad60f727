use async_trait::async_trait;
use std::time::Duration;

use super::ToolBackend;
use crate::error::BackendError;

const DEFAULT_RUN_DELAY: Duration = Duration::from_secs(2);

/// Stand-in backend: every tool is installed, runs just wait, installs and
/// updates succeed without doing anything.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    run_delay: Duration,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self {
            run_delay: DEFAULT_RUN_DELAY,
        }
    }

    pub fn with_run_delay(mut self, delay: Duration) -> Self {
        self.run_delay = delay;
        self
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolBackend for SimulatedBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn is_installed(&self, _tool: &str) -> bool {
        true
    }

    async fn run(&self, tool: &str) -> Result<(), BackendError> {
        tracing::debug!(tool, delay_ms = self.run_delay.as_millis() as u64, "simulating run");
        tokio::time::sleep(self.run_delay).await;
        Ok(())
    }

    async fn install(&self, tool: &str) -> Result<(), BackendError> {
        tracing::debug!(tool, "simulating install");
        Ok(())
    }
}
