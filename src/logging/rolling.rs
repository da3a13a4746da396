//! Size-based rolling log file writer.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Append-only log file that is rolled over once it reaches `max_bytes`.
///
/// On rollover the current file is renamed to `<stem>.<timestamp>.<ext>`
/// next to the original and a fresh file is opened at the original path.
/// Each write is a single locked append, so one formatted record never
/// straddles two files.
pub struct RollingFileWriter {
    state: Mutex<RollingState>,
}

struct RollingState {
    path: PathBuf,
    max_bytes: u64,
    file: File,
    written: u64,
}

impl RollingFileWriter {
    /// Open (or create) the log file, creating parent directories as needed.
    pub fn new(path: impl Into<PathBuf>, max_bytes: u64) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            state: Mutex::new(RollingState {
                path,
                max_bytes,
                file,
                written,
            }),
        })
    }

    /// Path of the active log file.
    pub fn path(&self) -> PathBuf {
        match self.state.lock() {
            Ok(state) => state.path.clone(),
            Err(poisoned) => poisoned.into_inner().path.clone(),
        }
    }
}

impl RollingState {
    fn append(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        fs::rename(&self.path, rotated_path(&self.path))?;
        self.file = open_append(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Pick an unused sibling path such as `agent.2026-10-19_14-03-55_123456.log`.
fn rotated_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "log".to_string());
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S_%6f").to_string();

    let name = |suffix: Option<usize>| {
        let mut name = format!("{}.{}", stem, stamp);
        if let Some(n) = suffix {
            name.push_str(&format!(".{}", n));
        }
        if let Some(ext) = &ext {
            name.push('.');
            name.push_str(ext);
        }
        path.with_file_name(name)
    };

    let mut candidate = name(None);
    let mut n = 1;
    while candidate.exists() {
        candidate = name(Some(n));
        n += 1;
    }
    candidate
}

impl Write for &RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;
        state.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;
        state.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = &'a RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}
