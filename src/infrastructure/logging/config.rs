use clap::ValueEnum;
use std::path::PathBuf;

/// How the logger is set up, as chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default level (trace, debug, info, warn, error); `RUST_LOG` overrides it.
    pub level: String,
    /// Format of the stderr stream.
    pub format: LogFormat,
    /// Also write JSON files here when set.
    pub log_dir: Option<PathBuf>,
    /// Off for `--quiet`; file output is unaffected.
    pub enable_stderr: bool,
    /// Rollover period for files in `log_dir`.
    pub rotation: RotationPolicy,
}

/// Stderr log format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Compact human-readable lines.
    #[default]
    Pretty,
}

/// When a new log file is started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    /// A single `tales-config.log` that is appended to.
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
            log_dir: None,
            enable_stderr: true,
            rotation: RotationPolicy::default(),
        }
    }
}
