//! Injected logging for UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive an [`AppLogger`] through Leptos context instead of
//! writing to the console directly. The default sink forwards to the `log`
//! facade, which `console_log` routes to the browser console after
//! hydration and the server's tracing subscriber picks up during SSR.

#[cfg(test)]
#[path = "logger_test.rs"]
mod logger_test;

use std::sync::Arc;

use log::Level;

/// Destination for UI log records.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

/// Forwards records to the `log` facade under a fixed target.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleLogger {
    target: &'static str,
}

impl ConsoleLogger {
    #[must_use]
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new("chat_viewer")
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.target, level, "{message}");
    }
}

/// Cloneable handle provided as context.
#[derive(Clone)]
pub struct AppLogger(Arc<dyn Logger>);

impl AppLogger {
    pub fn new(sink: impl Logger + 'static) -> Self {
        Self(Arc::new(sink))
    }

    #[must_use]
    pub fn console() -> Self {
        Self::new(ConsoleLogger::default())
    }

    pub fn debug(&self, message: &str) {
        self.0.log(Level::Debug, message);
    }

    pub fn warn(&self, message: &str) {
        self.0.log(Level::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.0.log(Level::Error, message);
    }
}

impl std::fmt::Debug for AppLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AppLogger")
    }
}

/// In-memory sink for asserting on log output in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: std::sync::Mutex<Vec<(Level, String)>>,
}

#[cfg(test)]
impl RecordingLogger {
    /// A logger handle plus the recorder it writes into.
    pub fn shared() -> (AppLogger, Arc<RecordingLogger>) {
        let recorder = Arc::new(RecordingLogger::default());
        (AppLogger(recorder.clone()), recorder)
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_owned()));
        }
    }
}
