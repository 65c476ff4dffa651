//! A `log` back-end that keeps recent lines for the status area.
//!
//! The terminal UI owns stdout while it runs, so log records are buffered
//! in memory and drawn under the grid instead of being printed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "PATHVIZ_LOG";

/// A bounded, shareable buffer of the most recent status lines.
#[derive(Clone, Debug)]
pub struct StatusLines {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl StatusLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a line, dropping the oldest when full.
    pub fn push(&self, line: impl Into<String>) {
        let mut lines = self.lock();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line.into());
    }

    /// Up to `n` most recent lines, oldest first.
    pub fn recent(&self, n: usize) -> Vec<String> {
        let lines = self.lock();
        let skip = lines.len().saturating_sub(n);
        lines.iter().skip(skip).cloned().collect()
    }
}

/// [`Log`] implementation writing into [`StatusLines`].
#[derive(Debug)]
pub struct StatusLog {
    level: LevelFilter,
    lines: StatusLines,
}

impl StatusLog {
    pub fn new(level: LevelFilter, lines: StatusLines) -> Self {
        Self { level, lines }
    }
}

impl Log for StatusLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = match record.level() {
            log::Level::Info => record.args().to_string(),
            level => format!("[{level}] {}", record.args()),
        };
        self.lines.push(line);
    }

    fn flush(&self) {}
}

/// Level for a `PATHVIZ_LOG` value: `debug`/`trace` are honoured, anything
/// else means `Info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("trace") => LevelFilter::Trace,
        Some(v) if v.eq_ignore_ascii_case("debug") => LevelFilter::Debug,
        _ => LevelFilter::Info,
    }
}

/// Install a [`StatusLog`] as the global logger, at the level chosen by
/// [`LOG_ENV`].
pub fn init(lines: StatusLines) -> Result<(), SetLoggerError> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    log::set_boxed_logger(Box::new(StatusLog::new(level, lines)))?;
    log::set_max_level(level);
    Ok(())
}
