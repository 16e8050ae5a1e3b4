use serde::{Deserialize, Serialize};

/// Run-state of a single monitored agent.
///
/// Serde's externally-tagged representation gives the wire shape directly:
/// the three bare variants encode as the string literals `"Off"`,
/// `"Processing"` and `"Waiting"`, the error variant as
/// `{"Error": "<message>"}`. Decoding the dual representation happens here,
/// at the serde boundary, never in rendering code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Off,
    Processing,
    Waiting,
    Error(String),
}

impl AgentStatus {
    /// Processing and Waiting both count toward the active total.
    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Processing | AgentStatus::Waiting)
    }

    /// Display label: the bare state name, or `Error: <message>`.
    pub fn label(&self) -> String {
        match self {
            AgentStatus::Off => "Off".to_string(),
            AgentStatus::Processing => "Processing".to_string(),
            AgentStatus::Waiting => "Waiting".to_string(),
            AgentStatus::Error(message) => format!("Error: {}", message),
        }
    }

    /// Display glyph, one per state; constant for errors regardless of message.
    pub fn icon(&self) -> &'static str {
        match self {
            AgentStatus::Off => "○",
            AgentStatus::Processing => "●",
            AgentStatus::Waiting => "◐",
            AgentStatus::Error(_) => "✗",
        }
    }
}

/// Snapshot of one agent: identity, run-state, and installation state.
///
/// `name` is the stable identity key within a summary; `available` tracks
/// whether the underlying tool is installed at all, independent of status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub name: String,
    pub status: AgentStatus,
    pub available: bool,
    pub last_updated: Option<String>,
}

/// Aggregate snapshot of all agents, produced whole on every poll.
///
/// Count consistency (`active_count = processing_count + waiting_count`) is
/// the producer's responsibility; consumers never recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub total_agents: usize,
    pub processing_count: usize,
    pub waiting_count: usize,
    pub active_count: usize,
    pub agents: Vec<AgentInfo>,
    pub last_updated: String,
    pub current_directory: String,
}
