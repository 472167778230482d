//! Log sinks
//!
//! Two streams: access/info lines and warning/error lines. Each goes to a
//! file when one is configured, otherwise to the console. The process-wide
//! instance lives in a `OnceLock`; before `init` runs, callers write to the
//! console directly.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static SINKS: OnceLock<LogSinks> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
pub enum Console {
    Stdout,
    Stderr,
}

impl Console {
    /// Write errors are dropped: a closed pipe must not take the server down
    pub fn write_line(self, line: &str) {
        let _ = match self {
            Self::Stdout => writeln!(io::stdout().lock(), "{line}"),
            Self::Stderr => writeln!(io::stderr().lock(), "{line}"),
        };
    }
}

enum Sink {
    Console(Console),
    File(Mutex<LineWriter<File>>),
}

impl Sink {
    fn open(path: Option<&str>, console: Console) -> io::Result<Self> {
        match path {
            Some(path) => Ok(Self::File(Mutex::new(LineWriter::new(open_append(path)?)))),
            None => Ok(Self::Console(console)),
        }
    }

    fn write_line(&self, line: &str) {
        match self {
            Self::Console(console) => console.write_line(line),
            Self::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{line}");
                }
            }
        }
    }
}

/// Access and error sinks
pub struct LogSinks {
    access: Sink,
    error: Sink,
}

impl LogSinks {
    fn open(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        Ok(Self {
            access: Sink::open(access_log_file, Console::Stdout)?,
            error: Sink::open(error_log_file, Console::Stderr)?,
        })
    }

    pub fn access_line(&self, line: &str) {
        self.access.write_line(line);
    }

    pub fn error_line(&self, line: &str) {
        self.error.write_line(line);
    }
}

/// Open for appending, creating the file and its parent directories
fn open_append(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the process-wide sinks; fails if log files cannot be opened
/// or sinks were already installed
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let sinks = LogSinks::open(access_log_file, error_log_file)?;
    SINKS
        .set(sinks)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "log sinks already initialized"))
}

pub fn get() -> Option<&'static LogSinks> {
    SINKS.get()
}
