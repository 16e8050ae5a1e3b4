pub mod backend;
pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod monitors;

pub use backend::{LocalBackend, StatusBackend};
pub use config::{MonitorsConfig, VigilConfig};
pub use error::{VigilError, VigilResult};
pub use manager::AgentManager;
pub use models::{AgentInfo, AgentStatus, AgentSummary};
pub use monitors::{
    AgentMonitor, ClaudeCodeMonitor, GeminiMonitor, ProcessRecord, ProcessScan, ProcessTable,
};
