use super::{classify_by_cpu, command_on_path, AgentMonitor, ProcessRecord, ProcessScan};
use crate::models::AgentStatus;

/// Monitors a Claude Code session running in the watched directory.
///
/// Claude Code ships as a node-hosted CLI, so detection looks at both the
/// executable path and the command line: a direct `claude` binary, or a
/// node process whose arguments name the CLI package. `--version`
/// invocations are probes, not sessions, and never count.
pub struct ClaudeCodeMonitor;

impl ClaudeCodeMonitor {
    pub fn new() -> Self {
        Self
    }

    fn matches(record: &ProcessRecord) -> bool {
        if record.cmdline.contains("--version") {
            return false;
        }
        if record.exe.contains("node") {
            return record.cmdline.contains("claude")
                || record.cmdline.contains("@anthropic-ai/claude-code");
        }
        record.exe.contains("claude")
    }
}

impl AgentMonitor for ClaudeCodeMonitor {
    fn name(&self) -> &'static str {
        "Claude Code"
    }

    fn status(&self, scan: &ProcessScan) -> AgentStatus {
        let watched = scan.watched_dir();
        scan.records()
            .iter()
            .find(|record| Self::matches(record) && record.runs_in(watched))
            .map(|record| classify_by_cpu(record.cpu_percent))
            .unwrap_or(AgentStatus::Off)
    }

    fn is_available(&self) -> bool {
        command_on_path("claude")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn record(exe: &str, cmdline: &str, cwd: &str, cpu: f32) -> ProcessRecord {
        ProcessRecord {
            pid: 100,
            exe: exe.to_string(),
            cmdline: cmdline.to_string(),
            cwd: Some(PathBuf::from(cwd)),
            cpu_percent: cpu,
        }
    }

    fn scan(records: Vec<ProcessRecord>) -> ProcessScan {
        ProcessScan::new(records, PathBuf::from("/work/project"))
    }

    #[test]
    fn test_off_when_no_match() {
        let monitor = ClaudeCodeMonitor::new();
        assert_eq!(monitor.status(&scan(vec![])), AgentStatus::Off);

        let unrelated = scan(vec![record("/usr/bin/vim", "vim src/main.rs", "/work/project", 2.0)]);
        assert_eq!(monitor.status(&unrelated), AgentStatus::Off);
    }

    #[test]
    fn test_processing_when_busy() {
        let monitor = ClaudeCodeMonitor::new();
        let busy = scan(vec![record(
            "/usr/local/bin/claude",
            "claude",
            "/work/project",
            12.5,
        )]);
        assert_eq!(monitor.status(&busy), AgentStatus::Processing);
    }

    #[test]
    fn test_waiting_when_idle() {
        let monitor = ClaudeCodeMonitor::new();
        let idle = scan(vec![record(
            "/usr/local/bin/claude",
            "claude",
            "/work/project",
            0.3,
        )]);
        assert_eq!(monitor.status(&idle), AgentStatus::Waiting);
    }

    #[test]
    fn test_node_hosted_session() {
        let monitor = ClaudeCodeMonitor::new();
        let hosted = scan(vec![record(
            "/usr/bin/node",
            "node /usr/lib/node_modules/@anthropic-ai/claude-code/cli.js",
            "/work/project",
            5.0,
        )]);
        assert_eq!(monitor.status(&hosted), AgentStatus::Processing);
    }

    #[test]
    fn test_other_directory_ignored() {
        let monitor = ClaudeCodeMonitor::new();
        let elsewhere = scan(vec![record(
            "/usr/local/bin/claude",
            "claude",
            "/work/other",
            5.0,
        )]);
        assert_eq!(monitor.status(&elsewhere), AgentStatus::Off);
    }

    #[test]
    fn test_version_probe_ignored() {
        let monitor = ClaudeCodeMonitor::new();
        let probe = scan(vec![record(
            "/usr/local/bin/claude",
            "claude --version",
            "/work/project",
            5.0,
        )]);
        assert_eq!(monitor.status(&probe), AgentStatus::Off);
    }

    #[test]
    fn test_node_without_claude_args_ignored() {
        let monitor = ClaudeCodeMonitor::new();
        let other_node = scan(vec![record(
            "/usr/bin/node",
            "node server.js",
            "/work/project",
            50.0,
        )]);
        assert_eq!(monitor.status(&other_node), AgentStatus::Off);
    }
}
