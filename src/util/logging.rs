use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter, SetLoggerError};

/// Environment variable that overrides the configured log filter, using
/// `env_logger` filter syntax (e.g. `debug`).
pub const LOG_ENV: &str = "CALCULATOR_LOG";

/// Timestamp layout prefixed to every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Most verbose level that is written.
    pub level:      LevelFilter,
    /// Prefix each line with a local timestamp.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level:      LevelFilter::Warn,
               timestamps: true, }
    }
}

impl LogConfig {
    /// Debug output, including the parsed calculation.
    #[must_use]
    pub fn verbose() -> Self {
        Self { level: LevelFilter::Debug,
               ..Self::default() }
    }

    /// Same level as the default, without timestamps.
    ///
    /// # Example
    /// ```
    /// use calculator::util::logging::LogConfig;
    ///
    /// let config = LogConfig::plain();
    /// assert!(!config.timestamps);
    /// assert_eq!(config.level, LogConfig::default().level);
    /// ```
    #[must_use]
    pub fn plain() -> Self {
        Self { timestamps: false,
               ..Self::default() }
    }
}

/// Formats the text of one log line, without the trailing newline.
///
/// Error records carry no level tag so the line reads `<timestamp> <message>`.
/// Other levels are tagged, e.g. `<timestamp> [DEBUG] <message>`.
///
/// # Example
/// ```
/// use calculator::util::logging::format_line;
/// use log::Level;
///
/// assert_eq!(format_line(None, Level::Error, "invalid operand"), "invalid operand");
/// assert_eq!(format_line(Some("2024/01/02 03:04:05"), Level::Debug, "left = 1"),
///            "2024/01/02 03:04:05 [DEBUG] left = 1");
/// ```
#[must_use]
pub fn format_line(timestamp: Option<&str>, level: Level, message: &str) -> String {
    let mut line = String::new();

    if let Some(timestamp) = timestamp {
        line.push_str(timestamp);
        line.push(' ');
    }

    if level != Level::Error {
        line.push_str(&format!("[{level}] "));
    }

    line.push_str(message);
    line
}

/// Reports a failed calculation on standard error.
///
/// The message goes through the logger as an error record. If the active
/// filter (for example `CALCULATOR_LOG=off`) drops error records, or no logger
/// is installed, the bare message is written to standard error instead.
pub fn report_failure(error: &impl std::fmt::Display) {
    if log::log_enabled!(Level::Error) {
        log::error!("{error}");
    } else {
        eprintln!("{error}");
    }
}

/// Initializes the global logger.
///
/// Output goes to standard error. The level comes from `config` unless
/// [`LOG_ENV`] is set. Failures are reported through [`report_failure`],
/// which stays visible whatever [`LOG_ENV`] says.
///
/// # Errors
/// Returns an error if a global logger has already been installed.
pub fn init_logging(config: LogConfig) -> Result<(), SetLoggerError> {
    let mut builder = Builder::new();

    builder.filter_level(config.level)
           .parse_env(Env::new().filter(LOG_ENV))
           .target(Target::Stderr)
           .format(move |buf, record| {
               let timestamp = config.timestamps
                                     .then(|| Local::now().format(TIMESTAMP_FORMAT).to_string());
               let line = format_line(timestamp.as_deref(),
                                      record.level(),
                                      &record.args().to_string());
               writeln!(buf, "{line}")
           });

    builder.try_init()?;

    log::debug!("Logging initialized with level: {:?}", config.level);
    Ok(())
}
