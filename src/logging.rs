/// Structured logging for the fingerprint grouping tool
///
/// Provides stage-tagged diagnostics with optional line context,
/// timestamps, and severity levels. Console output always goes to
/// standard error so that standard output carries only the groups.
/// A log file may be configured for an appended, timestamped copy.

use chrono::Utc;
use serde::Deserialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use crate::engine::RunSummary;
use crate::model::Rejection;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline Stages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Store,
    Print,
    System,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Parse => write!(f, "PARSE"),
            Stage::Store => write!(f, "STORE"),
            Stage::Print => write!(f, "PRINT"),
            Stage::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        *lock_logger() = Some(logger);
    }

    fn log(&self, level: LogLevel, stage: Stage, context: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }
        self.emit(level, stage, context, message, true);
    }

    /// Always reaches the console; the file copy still honours `min_level`.
    fn log_to_console_always(&self, level: LogLevel, stage: Stage, context: Option<&str>, message: &str) {
        self.emit(level, stage, context, message, level >= self.min_level);
    }

    fn emit(&self, level: LogLevel, stage: Stage, context: Option<&str>, message: &str, to_file: bool) {
        eprintln!("{}", console_line(self.console_timestamps, level, stage, context, message));

        if !to_file {
            return;
        }
        if let Some(ref path) = self.log_file {
            let log_entry = timestamped_entry(level, stage, context, message);
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

/// Locks the global slot. A poisoned lock still holds a usable logger.
fn lock_logger() -> MutexGuard<'static, Option<Logger>> {
    LOGGER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_logger(f: impl FnOnce(&Logger)) {
    if let Some(logger) = lock_logger().as_ref() {
        f(logger);
    }
}

fn context_part(context: Option<&str>) -> String {
    context.map(|c| format!(" [{}]", c)).unwrap_or_default()
}

fn timestamped_entry(level: LogLevel, stage: Stage, context: Option<&str>, message: &str) -> String {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    format!("{} {} {}{}: {}", timestamp, level, stage, context_part(context), message)
}

fn console_line(
    timestamps: bool,
    level: LogLevel,
    stage: Stage,
    context: Option<&str>,
    message: &str,
) -> String {
    if timestamps {
        return timestamped_entry(level, stage, context, message);
    }
    let context_part = context_part(context);
    match level {
        LogLevel::Error => format!("error: {}{}: {}", stage, context_part, message),
        LogLevel::Warning => format!("warning: {}{}: {}", stage, context_part, message),
        LogLevel::Info => message.to_string(),
        LogLevel::Debug => format!("[DEBUG] {}", message),
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

pub fn info(stage: Stage, context: Option<&str>, message: &str) {
    with_logger(|logger| logger.log(LogLevel::Info, stage, context, message));
}

pub fn warn(stage: Stage, context: Option<&str>, message: &str) {
    with_logger(|logger| logger.log(LogLevel::Warning, stage, context, message));
}

pub fn debug(stage: Stage, context: Option<&str>, message: &str) {
    with_logger(|logger| logger.log(LogLevel::Debug, stage, context, message));
}

// ---------------------------------------------------------------------------
// Structured Helpers
// ---------------------------------------------------------------------------

/// Formats the diagnostic for a skipped line.
pub fn rejection_message(rejection: &Rejection) -> String {
    format!("malformed line skipped: {}", rejection.error)
}

/// Reports a skipped line as a warning, tagged with its line number.
///
/// Every malformed line produces exactly one stderr message, whatever the
/// configured level and even before `init_logger` has run.
pub fn log_rejection(rejection: &Rejection) {
    let context = format!("line {}", rejection.line_number);
    let message = rejection_message(rejection);

    let guard = lock_logger();
    match guard.as_ref() {
        Some(logger) => {
            logger.log_to_console_always(LogLevel::Warning, Stage::Parse, Some(&context), &message)
        }
        None => eprintln!(
            "{}",
            console_line(false, LogLevel::Warning, Stage::Parse, Some(&context), &message)
        ),
    }
}

/// Logs the end-of-run counts, plus the full summary as JSON at debug level.
pub fn log_run_summary(summary: &RunSummary) {
    let message = format!(
        "Run complete: {} lines read, {} accepted, {} rejected; {} groups printed",
        summary.lines_read,
        summary.records_accepted,
        summary.rejections.len(),
        summary.print.groups_printed,
    );
    info(Stage::System, None, &message);

    match serde_json::to_string(summary) {
        Ok(json) => debug(Stage::System, None, &json),
        Err(e) => warn(Stage::System, None, &format!("could not serialize run summary: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParseError;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_parses_case_insensitively() {
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!(" Warning ".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_rejection_message_names_the_cause() {
        let rejection = Rejection {
            line_number: 7,
            error: ParseError::EmptyName,
        };
        let message = rejection_message(&rejection);
        assert!(message.starts_with("malformed line skipped"));
        assert!(message.contains("name field is empty"));
    }

    #[test]
    fn test_console_line_formats() {
        assert_eq!(
            console_line(false, LogLevel::Warning, Stage::Parse, Some("line 2"), "bad"),
            "warning: PARSE [line 2]: bad"
        );
        assert_eq!(
            console_line(false, LogLevel::Error, Stage::System, None, "boom"),
            "error: SYS: boom"
        );
        let stamped = console_line(true, LogLevel::Warning, Stage::Parse, Some("line 2"), "bad");
        assert!(stamped.ends_with("UTC WARN PARSE [line 2]: bad"), "got {}", stamped);
    }

    #[test]
    fn test_rejection_file_copy_follows_level() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("fgroups.log");
        let quiet = Logger {
            min_level: LogLevel::Error,
            log_file: Some(path.to_string_lossy().into_owned()),
            console_timestamps: false,
        };

        quiet.log_to_console_always(LogLevel::Warning, Stage::Parse, Some("line 1"), "skipped");
        assert!(!path.exists(), "warning is below the file threshold");

        let verbose = Logger {
            min_level: LogLevel::Warning,
            ..quiet
        };
        verbose.log_to_console_always(LogLevel::Warning, Stage::Parse, Some("line 1"), "skipped");
        let contents = std::fs::read_to_string(&path).expect("log file written");
        assert!(contents.contains("WARN PARSE [line 1]: skipped"));
    }

    #[test]
    fn test_log_file_receives_timestamped_entries() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("fgroups.log");
        let logger = Logger {
            min_level: LogLevel::Warning,
            log_file: Some(path.to_string_lossy().into_owned()),
            console_timestamps: false,
        };

        logger.log(LogLevel::Warning, Stage::Parse, Some("line 3"), "malformed line skipped");
        logger.log(LogLevel::Info, Stage::System, None, "below threshold");

        let contents = std::fs::read_to_string(&path).expect("log file written");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1, "info entry must be filtered at warning level");
        assert!(lines[0].contains("WARN PARSE [line 3]: malformed line skipped"));
        assert!(lines[0].contains("UTC"));
    }
}
