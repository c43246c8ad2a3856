// logging.rs
// Timestamped log lines for client operations.
// Errors go to stderr so they stay visible next to interactive CLI output.

use chrono::Local;

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("{timestamp} - {} - {message}", level.label())
}

pub fn log_message(level: LogLevel, message: &str) {
    let line = format_line(level, message);
    if let LogLevel::Error = level {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn log_info(message: &str) {
    log_message(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_message(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_message(LogLevel::Error, message);
}

fn request_failure_line(action: &str, status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("{action} failed with status {status} (empty body)")
    } else {
        format!("{action} failed with status {status}: {}", body.trim())
    }
}

/// Log a non-success server answer with its status and body
pub fn log_request_failure(action: &str, status: u16, body: &str) {
    log_error(&request_failure_line(action, status, body));
}
