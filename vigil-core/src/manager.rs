use std::path::PathBuf;

use chrono::Local;
use tracing::debug;

use crate::config::VigilConfig;
use crate::models::{AgentInfo, AgentStatus, AgentSummary};
use crate::monitors::{AgentMonitor, ClaudeCodeMonitor, GeminiMonitor, ProcessTable};

/// Owns the fixed monitor set and derives a fresh summary on demand.
///
/// Monitors stay listed even when their tool is not installed, so the
/// dashboard can render the "Not installed" marker next to the row instead
/// of silently dropping it.
pub struct AgentManager {
    monitors: Vec<Box<dyn AgentMonitor>>,
    table: ProcessTable,
    watched_dir: PathBuf,
}

impl AgentManager {
    pub fn new(config: &VigilConfig) -> Self {
        let mut monitors: Vec<Box<dyn AgentMonitor>> = Vec::new();
        if config.monitors.claude_code {
            monitors.push(Box::new(ClaudeCodeMonitor::new()));
        }
        if config.monitors.gemini {
            monitors.push(Box::new(GeminiMonitor::new()));
        }

        let watched_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_monitors(monitors, watched_dir)
    }

    pub fn with_monitors(monitors: Vec<Box<dyn AgentMonitor>>, watched_dir: PathBuf) -> Self {
        Self {
            monitors,
            table: ProcessTable::new(),
            watched_dir,
        }
    }

    /// Prime the process table so the first real snapshot has a CPU
    /// baseline to diff against.
    pub fn warm_up(&mut self) {
        let _ = self.table.snapshot(&self.watched_dir);
    }

    /// One process-table snapshot, every monitor classified against it,
    /// counts derived from that single pass.
    pub fn summary(&mut self) -> AgentSummary {
        let scan = self.table.snapshot(&self.watched_dir);
        let agents: Vec<AgentInfo> = self
            .monitors
            .iter()
            .map(|monitor| monitor.info(&scan))
            .collect();

        let processing_count = agents
            .iter()
            .filter(|info| info.status == AgentStatus::Processing)
            .count();
        let waiting_count = agents
            .iter()
            .filter(|info| info.status == AgentStatus::Waiting)
            .count();

        debug!(
            total = agents.len(),
            processing = processing_count,
            waiting = waiting_count,
            "derived agent summary"
        );

        AgentSummary {
            total_agents: agents.len(),
            processing_count,
            waiting_count,
            active_count: processing_count + waiting_count,
            agents,
            last_updated: Local::now().format("%H:%M:%S").to_string(),
            current_directory: self.watched_dir.to_string_lossy().into_owned(),
        }
    }
}
