use std::sync::{Mutex, PoisonError};

use super::{classify_by_cpu, command_on_path, AgentMonitor, ProcessRecord, ProcessScan};
use crate::models::AgentStatus;

const NODE_MARKERS: &[&str] = &["@google/gemini-cli", "gemini-cli", "gemini"];
const PYTHON_MARKERS: &[&str] = &["gemini", "google-generativeai", "google.generativeai", "genai"];

/// Monitors a Gemini CLI session running in the watched directory.
///
/// The Gemini CLI has node- and python-hosted variants, so the command line
/// decides for interpreter processes. A matched PID is remembered between
/// snapshots: as long as it is still present and still matches, the fast
/// path skips walking the rest of the table.
pub struct GeminiMonitor {
    cached_pid: Mutex<Option<u32>>,
}

impl GeminiMonitor {
    pub fn new() -> Self {
        Self {
            cached_pid: Mutex::new(None),
        }
    }

    fn matches(record: &ProcessRecord) -> bool {
        if record.cmdline.contains("--version") {
            return false;
        }
        if record.exe.contains("python") {
            return PYTHON_MARKERS
                .iter()
                .any(|marker| record.cmdline.contains(marker));
        }
        if record.exe.contains("node") {
            return NODE_MARKERS
                .iter()
                .any(|marker| record.cmdline.contains(marker));
        }
        record.exe.contains("gemini")
    }

    fn classify(record: &ProcessRecord) -> AgentStatus {
        classify_by_cpu(record.cpu_percent)
    }
}

impl AgentMonitor for GeminiMonitor {
    fn name(&self) -> &'static str {
        "Gemini CLI"
    }

    fn status(&self, scan: &ProcessScan) -> AgentStatus {
        let watched = scan.watched_dir();
        let mut cached = self
            .cached_pid
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(pid) = *cached {
            match scan.by_pid(pid) {
                Some(record) if Self::matches(record) && record.runs_in(watched) => {
                    return Self::classify(record);
                }
                _ => *cached = None,
            }
        }

        for record in scan.records() {
            if Self::matches(record) && record.runs_in(watched) {
                *cached = Some(record.pid);
                return Self::classify(record);
            }
        }

        AgentStatus::Off
    }

    fn is_available(&self) -> bool {
        command_on_path("gemini")
    }
}
