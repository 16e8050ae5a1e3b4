mod agent;

pub use agent::{AgentInfo, AgentStatus, AgentSummary};
