//! Terminal logger on stderr.
//!
//! Library records emitted through `log` are forwarded into the same drain.

use clap::ValueEnum;
use slog::{o, Drain, Level, Logger};
use slog_scope::GlobalLoggerGuard;

/// Verbosity selected with `--log-level`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Everything, including map-to-point branch selection.
    Trace,
    /// Hash inputs and point summaries.
    Debug,
    /// Command progress.
    #[default]
    Info,
    /// Rejected inputs.
    Warn,
    /// Errors only.
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warning,
            LogLevel::Error => Level::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Builds an asynchronous terminal logger filtered at `level`.
pub fn create_logger(level: LogLevel) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog::LevelFilter::new(drain, level.into()).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}

/// Installs the global logger and routes `log` records into it.
///
/// The returned guard must be held for as long as logging is needed.
pub fn init(level: LogLevel) -> Result<GlobalLoggerGuard, log::SetLoggerError> {
    let guard = slog_scope::set_global_logger(create_logger(level));
    slog_stdlog::init_with_level(level.into())?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::trace(LogLevel::Trace, Level::Trace, log::Level::Trace)]
    #[case::info(LogLevel::Info, Level::Info, log::Level::Info)]
    #[case::warn(LogLevel::Warn, Level::Warning, log::Level::Warn)]
    fn level_mapping(
        #[case] level: LogLevel,
        #[case] slog_level: Level,
        #[case] log_level: log::Level,
    ) {
        assert_eq!(Level::from(level), slog_level);
        assert_eq!(log::Level::from(level), log_level);
    }
}
