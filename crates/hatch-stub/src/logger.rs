//! Stubbed adapter logger.

use std::fmt;

use tracing::{debug, error, info, trace, warn};

use crate::reset::MockReset;
use crate::stub::Stub;

/// Log levels offered by the adapter logger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Silly,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Silly,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Silly => "silly",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logger handed to adapter code under test.
///
/// Each level is a [`Stub`] recording messages. Unless a test overrides it,
/// a level forwards its message to `tracing` (`silly` maps to `trace`).
#[derive(Debug)]
pub struct LoggerMock {
    silly: Stub<String, ()>,
    debug: Stub<String, ()>,
    info: Stub<String, ()>,
    warn: Stub<String, ()>,
    error: Stub<String, ()>,
}

impl LoggerMock {
    pub fn new() -> Self {
        Self {
            silly: Stub::new("silly"),
            debug: Stub::new("debug"),
            info: Stub::new("info"),
            warn: Stub::new("warn"),
            error: Stub::new("error"),
        }
    }

    /// The stub behind `level`.
    pub fn stub(&self, level: LogLevel) -> &Stub<String, ()> {
        match level {
            LogLevel::Silly => &self.silly,
            LogLevel::Debug => &self.debug,
            LogLevel::Info => &self.info,
            LogLevel::Warn => &self.warn,
            LogLevel::Error => &self.error,
        }
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.stub(level).invoke(message.into(), |message| match level {
            LogLevel::Silly => trace!(target: "hatch::adapter", "{message}"),
            LogLevel::Debug => debug!(target: "hatch::adapter", "{message}"),
            LogLevel::Info => info!(target: "hatch::adapter", "{message}"),
            LogLevel::Warn => warn!(target: "hatch::adapter", "{message}"),
            LogLevel::Error => error!(target: "hatch::adapter", "{message}"),
        });
    }

    pub fn silly(&self, message: impl Into<String>) {
        self.log(LogLevel::Silly, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Messages logged at `level`, oldest first.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.stub(level).calls()
    }
}

impl Default for LoggerMock {
    fn default() -> Self {
        Self::new()
    }
}

impl MockReset for LoggerMock {
    fn reset_mock_history(&self) {
        for level in LogLevel::ALL {
            self.stub(level).reset_mock_history();
        }
    }

    fn reset_mock_behavior(&self) {
        for level in LogLevel::ALL {
            self.stub(level).reset_mock_behavior();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn records_messages_per_level() {
        init_tracing();
        let log = LoggerMock::new();
        log.info("adapter started");
        log.warn("slow response");
        log.info("ready");

        assert_eq!(log.messages(LogLevel::Info), vec!["adapter started", "ready"]);
        assert_eq!(log.messages(LogLevel::Warn), vec!["slow response"]);
        assert!(log.messages(LogLevel::Error).is_empty());
    }

    #[test]
    fn override_captures_instead_of_tracing() {
        let log = LoggerMock::new();
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        log.stub(LogLevel::Error)
            .calls_fake(move |m| sink.lock().unwrap().push(m.to_uppercase()));

        log.error("disk full");
        assert_eq!(*captured.lock().unwrap(), vec!["DISK FULL".to_string()]);
    }

    #[test]
    fn reset_covers_every_level() {
        let log = LoggerMock::new();
        log.stub(LogLevel::Silly).calls_fake(|_| ());
        for level in LogLevel::ALL {
            log.log(level, level.as_str());
        }

        log.reset_mock();
        for level in LogLevel::ALL {
            assert!(!log.stub(level).was_called(), "{level} kept history");
            assert!(!log.stub(level).has_behavior(), "{level} kept behavior");
        }
    }
}
