//! In-memory log sink for the terminal shell.
//!
//! The terminal is owned by the UI while a game runs, so log records are
//! kept in a bounded buffer and drawn in a side panel instead of printed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use super::constants::LOG_BUFFER_CAPACITY;

/// Shared view of the most recent log lines.
#[derive(Debug, Clone, Default)]
pub struct LogHandle {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl LogHandle {
    /// The newest `count` lines, oldest first.
    pub fn recent(&self, count: usize) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => {
                let skip = lines.len().saturating_sub(count);
                lines.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    level: LevelFilter,
}

impl LogBuffer {
    pub fn new(level: LevelFilter) -> (Self, LogHandle) {
        Self::with_capacity(level, LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(level: LevelFilter, capacity: usize) -> (Self, LogHandle) {
        let handle = LogHandle::default();
        (
            LogBuffer {
                lines: handle.lines.clone(),
                capacity: capacity.max(1),
                level,
            },
            handle,
        )
    }

    /// Register a buffer as the global logger.
    pub fn install(level: LevelFilter) -> Result<LogHandle, SetLoggerError> {
        let (logger, handle) = Self::new(level);
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(handle)
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERR",
        Level::Warn => "WRN",
        Level::Info => "INF",
        Level::Debug => "DBG",
        Level::Trace => "TRC",
    }
}

impl Log for LogBuffer {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {} {}",
            Local::now().format("%H:%M:%S"),
            level_tag(record.level()),
            record.args()
        );
        if let Ok(mut lines) = self.lines.lock() {
            lines.push_back(line);
            while lines.len() > self.capacity {
                lines.pop_front();
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &LogBuffer, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_records_are_buffered_with_tag() {
        let (logger, handle) = LogBuffer::new(LevelFilter::Debug);
        emit(&logger, Level::Info, "round dealt");

        let lines = handle.recent(10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("INF round dealt"));
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let (logger, handle) = LogBuffer::new(LevelFilter::Info);
        emit(&logger, Level::Debug, "tick");
        emit(&logger, Level::Warn, "careful");
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let (logger, handle) = LogBuffer::with_capacity(LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }
        let lines = handle.recent(10);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_recent_returns_newest_tail() {
        let (logger, handle) = LogBuffer::new(LevelFilter::Trace);
        for i in 0..4 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }
        let lines = handle.recent(2);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[1].ends_with("line 3"));
        assert!(!handle.is_empty());
    }
}
