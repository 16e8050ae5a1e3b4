use std::path::{Path, PathBuf};

use sysinfo::{ProcessesToUpdate, System};

/// One row of the process table, flattened to the fields monitors match on.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    pub pid: u32,
    /// Executable path; empty when the kernel withholds it.
    pub exe: String,
    pub cmdline: String,
    pub cwd: Option<PathBuf>,
    pub cpu_percent: f32,
}

impl ProcessRecord {
    pub fn runs_in(&self, dir: &Path) -> bool {
        self.cwd.as_deref() == Some(dir)
    }
}

/// Point-in-time snapshot of the process table plus the directory the
/// dashboard is watching.
#[derive(Debug, Clone)]
pub struct ProcessScan {
    records: Vec<ProcessRecord>,
    watched_dir: PathBuf,
}

impl ProcessScan {
    pub fn new(records: Vec<ProcessRecord>, watched_dir: PathBuf) -> Self {
        Self {
            records,
            watched_dir,
        }
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn watched_dir(&self) -> &Path {
        &self.watched_dir
    }

    pub fn by_pid(&self, pid: u32) -> Option<&ProcessRecord> {
        self.records.iter().find(|record| record.pid == pid)
    }
}

/// Owns the sysinfo handle so CPU usage is measured between consecutive
/// snapshots rather than from a cold start.
pub struct ProcessTable {
    system: System,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self {
            system: System::new_all(),
        }
    }

    pub fn snapshot(&mut self, watched_dir: &Path) -> ProcessScan {
        self.system
            .refresh_processes(ProcessesToUpdate::All, true);

        let records = self
            .system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessRecord {
                pid: pid.as_u32(),
                exe: process
                    .exe()
                    .map(|path| path.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                cmdline: process
                    .cmd()
                    .iter()
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" "),
                cwd: process.cwd().map(Path::to_path_buf),
                cpu_percent: process.cpu_usage(),
            })
            .collect();

        ProcessScan::new(records, watched_dir.to_path_buf())
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}
