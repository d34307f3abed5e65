// src/diag.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

pub fn format_line(level: Level, message: &str) -> String {
    format!("{}: {}", level.as_str(), message)
}

pub fn report(level: Level, message: &str) {
    let line = format_line(level, message);
    match level {
        Level::Info => gloo::console::log!(line),
        Level::Warn => gloo::console::warn!(line),
        Level::Error => gloo::console::error!(line),
    }
}

pub fn info(message: &str) {
    report(Level::Info, message);
}

pub fn warn(message: &str) {
    report(Level::Warn, message);
}

pub fn error(message: &str) {
    report(Level::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_prefixes_level() {
        assert_eq!(format_line(Level::Info, "Page hidden"), "INFO: Page hidden");
        assert_eq!(
            format_line(Level::Error, "Failed to copy text"),
            "ERROR: Failed to copy text"
        );
    }
}
