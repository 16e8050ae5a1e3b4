mod claude_code;
mod gemini;
mod process;

pub use claude_code::ClaudeCodeMonitor;
pub use gemini::GeminiMonitor;
pub use process::{ProcessRecord, ProcessScan, ProcessTable};

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::models::{AgentInfo, AgentStatus};

/// CPU share above which a matched agent process counts as Processing
/// rather than Waiting.
pub(crate) const PROCESSING_CPU_THRESHOLD: f32 = 1.0;

/// Probes one agent against a process-table snapshot.
///
/// Monitors are pure classifiers over the snapshot: the one shared scan per
/// poll is taken by the manager, so adding monitors does not add rescans.
pub trait AgentMonitor: Send + Sync {
    fn name(&self) -> &'static str;

    fn status(&self, scan: &ProcessScan) -> AgentStatus;

    /// Whether the underlying tool is installed, independent of run-state.
    fn is_available(&self) -> bool;

    fn info(&self, scan: &ProcessScan) -> AgentInfo {
        AgentInfo {
            name: self.name().to_string(),
            status: self.status(scan),
            available: self.is_available(),
            last_updated: Some(Local::now().format("%H:%M:%S").to_string()),
        }
    }
}

pub(crate) fn classify_by_cpu(cpu_percent: f32) -> AgentStatus {
    if cpu_percent > PROCESSING_CPU_THRESHOLD {
        AgentStatus::Processing
    } else {
        AgentStatus::Waiting
    }
}

/// Look for an executable with the given name in the `PATH` directories.
pub(crate) fn command_on_path(name: &str) -> bool {
    std::env::var_os("PATH")
        .map(|path| find_in_dirs(name, std::env::split_paths(&path)))
        .unwrap_or(false)
}

pub(crate) fn find_in_dirs(name: &str, dirs: impl IntoIterator<Item = PathBuf>) -> bool {
    dirs.into_iter().any(|dir| is_executable(&dir.join(name)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
