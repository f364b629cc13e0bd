use chrono::prelude::*;
use directories::ProjectDirs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Appearance;

/// How a countdown run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Abandoned,
}

impl RunOutcome {
    fn as_str(self) -> &'static str {
        match self {
            RunOutcome::Completed => "completed",
            RunOutcome::Abandoned => "abandoned",
        }
    }
}

/// Best-effort CSV log of finished and abandoned countdowns, one row per
/// run. Callers ignore write failures; losing a log row never disturbs a
/// running timer.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new() -> Option<Self> {
        ProjectDirs::from("", "", "klok").map(|pd| Self {
            path: pd.config_dir().join("log.csv"),
        })
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn append(
        &self,
        duration_secs: u64,
        appearance: Appearance,
        outcome: RunOutcome,
    ) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // If the log file doesn't exist, we need to emit a header
        let needs_header = !self.path.exists();

        let mut log_file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        if needs_header {
            writeln!(log_file, "date,duration_secs,appearance,outcome")?;
        }

        writeln!(
            log_file,
            "{},{},{},{}",
            Local::now().format("%c"),
            duration_secs,
            appearance.to_string().to_lowercase(),
            outcome.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn header_is_written_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let log = HistoryLog::with_path(&path);

        log.append(360, Appearance::Red, RunOutcome::Completed)
            .unwrap();
        log.append(60, Appearance::Blue, RunOutcome::Abandoned)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,duration_secs,appearance,outcome");
        assert!(lines[1].ends_with(",360,red,completed"));
        assert!(lines[2].ends_with(",60,blue,abandoned"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("log.csv");
        let log = HistoryLog::with_path(&path);
        log.append(10, Appearance::Green, RunOutcome::Completed)
            .unwrap();
        assert!(path.exists());
    }
}
