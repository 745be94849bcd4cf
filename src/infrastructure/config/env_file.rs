use serde::Serialize;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Conventional name of the development env file.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// What happened when the env file was applied to the process environment.
///
/// None of these are errors; the file is a local-development convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EnvFileStatus {
    /// The file was read. Lines that failed to parse were skipped.
    Loaded { path: PathBuf, skipped_lines: usize },
    /// No file at the path.
    Missing { path: PathBuf },
    /// The file exists but could not be opened or read.
    Unreadable { path: PathBuf, reason: String },
    /// Env file loading was turned off.
    Disabled,
}

impl EnvFileStatus {
    /// True when the file was opened and applied.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Merge `KEY=VALUE` pairs from `path` into the process environment.
///
/// Variables that are already set keep their current value. A line that does
/// not parse is logged and skipped; the rest of the file still applies.
/// Failures are reported through the returned status and never propagated.
pub fn apply(path: &Path) -> EnvFileStatus {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no env file, using process environment only");
            return EnvFileStatus::Missing {
                path: path.to_path_buf(),
            };
        }
        Err(e) => return unreadable(path, &e),
    };

    let mut skipped_lines = 0;
    for item in iter {
        match item {
            Ok((key, value)) => {
                if env::var_os(&key).is_none() {
                    env::set_var(&key, value);
                }
            }
            // A read error repeats on every call; stop instead of spinning.
            Err(e @ dotenvy::Error::Io(_)) => return unreadable(path, &e),
            Err(e) => {
                skipped_lines += 1;
                tracing::warn!(path = %path.display(), error = %e, "skipping env file line");
            }
        }
    }

    tracing::debug!(path = %path.display(), skipped_lines, "loaded env file");
    EnvFileStatus::Loaded {
        path: path.to_path_buf(),
        skipped_lines,
    }
}

fn unreadable(path: &Path, e: &dotenvy::Error) -> EnvFileStatus {
    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable env file");
    EnvFileStatus::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
