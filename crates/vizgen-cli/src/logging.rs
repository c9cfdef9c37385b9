//! Tracing setup for the CLI: level filtering, output formats, and an
//! optional log file.
//!
//! # Log Levels
//!
//! - `error`: unusable inputs, fatal errors
//! - `warn`: suspicious configurations, non-fatal issues
//! - `info`: command progress and result counts
//! - `debug`: pipeline stage detail (mappings applied, payload shapes)
//! - `trace`: cell-level data
//!
//! # Usage
//!
//! ```ignore
//! use vizgen_cli::logging::{LogConfig, init_logging};
//!
//! init_logging(&LogConfig::default()).expect("init logging");
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Everything `init_logging` needs to know, resolved from CLI flags.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level cap applied when no `RUST_LOG` override is in effect.
    pub level_filter: LevelFilter,
    /// Whether `RUST_LOG` may override the configured level.
    pub use_env_filter: bool,
    /// Whether log lines carry timestamps.
    pub timestamps: bool,
    /// Whether to include the target (module path) in log output.
    pub show_target: bool,
    /// Whether span close events appear in JSON output.
    pub span_close_events: bool,
    /// Whether output may use ANSI colors.
    pub ansi: bool,
    /// Output format: pretty, compact, or json.
    pub format: LogFormat,
    /// Log file destination; stderr when unset.
    pub log_file: Option<PathBuf>,
}

/// How log events are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output.
    #[default]
    Pretty,
    /// One event per line.
    Compact,
    /// Newline-delimited JSON for machine consumers.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            timestamps: false,
            show_target: false,
            span_close_events: true,
            ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Set the level cap directly.
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    /// Toggle timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.timestamps = enable;
        self
    }

    /// Enable or disable the target (module path) in output.
    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.show_target = enable;
        self
    }

    /// Toggle ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.ansi = enable;
        self
    }

    /// Choose the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Route output to a file instead of stderr.
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
///
/// # Errors
///
/// Fails when the log file cannot be opened for appending.
///
/// # Panics
///
/// Panics if a global subscriber was already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, LogFileWriter::new(file));
        }
        None => init_logging_with_writer(config, io::stderr),
    }
    Ok(())
}

/// Install the subscriber on top of a caller-supplied writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(config));
    let base = fmt::layer()
        .with_ansi(config.ansi)
        .with_target(config.show_target)
        .with_writer(writer);

    match (config.format, config.timestamps) {
        (LogFormat::Json, _) => {
            let span_events = if config.span_close_events {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            registry
                .with(base.json().with_span_events(span_events))
                .init();
        }
        (LogFormat::Compact, true) => registry.with(base.compact()).init(),
        (LogFormat::Compact, false) => registry.with(base.compact().without_time()).init(),
        (LogFormat::Pretty, true) => registry.with(base).init(),
        (LogFormat::Pretty, false) => registry.with(base.without_time()).init(),
    }
}

/// Hands every layer the same file handle, serializing writes through a lock.
#[derive(Clone)]
struct LogFileWriter(Arc<Mutex<File>>);

impl LogFileWriter {
    fn new(file: File) -> Self {
        Self(Arc::new(Mutex::new(file)))
    }
}

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut file) => file.write(buf),
            Err(_) => Err(io::Error::other("log file lock poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Err(io::Error::other("log file lock poisoned")),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Build an `EnvFilter` from the configuration, letting `RUST_LOG` take over
/// when no explicit verbosity was requested.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    if config.use_env_filter
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }

    let level = config.level_filter.to_string().to_lowercase();
    EnvFilter::new(format!(
        "{level},vizgen_cli={level},vizgen_codegen={level},vizgen_dataset={level},\
         vizgen_methods={level}"
    ))
}
