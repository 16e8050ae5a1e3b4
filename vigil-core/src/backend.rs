use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{VigilError, VigilResult};
use crate::manager::AgentManager;
use crate::models::AgentSummary;

/// The three-call boundary the dashboard polls.
///
/// `init` runs once at startup, `agent_summary` on every tick, and `quit`
/// is a one-way signal when the user leaves; no acknowledgement of it is
/// ever consumed. The dashboard treats implementations as opaque, so the
/// backend can live in-process or behind a transport without the UI
/// changing.
#[async_trait]
pub trait StatusBackend: Send + Sync {
    async fn init(&self) -> VigilResult<()>;

    async fn agent_summary(&self) -> VigilResult<AgentSummary>;

    async fn quit(&self) -> VigilResult<()>;
}

/// In-process backend backed by [`AgentManager`].
pub struct LocalBackend {
    manager: Mutex<AgentManager>,
}

impl LocalBackend {
    pub fn new(manager: AgentManager) -> Self {
        Self {
            manager: Mutex::new(manager),
        }
    }

    fn lock(&self) -> VigilResult<MutexGuard<'_, AgentManager>> {
        self.manager
            .lock()
            .map_err(|_| VigilError::SummaryUnavailable("agent manager lock poisoned".to_string()))
    }
}

#[async_trait]
impl StatusBackend for LocalBackend {
    async fn init(&self) -> VigilResult<()> {
        // First snapshot establishes the CPU baseline later polls diff against.
        self.lock()?.warm_up();
        info!("local backend initialized");
        Ok(())
    }

    async fn agent_summary(&self) -> VigilResult<AgentSummary> {
        Ok(self.lock()?.summary())
    }

    async fn quit(&self) -> VigilResult<()> {
        debug!("quit signal received");
        Ok(())
    }
}
