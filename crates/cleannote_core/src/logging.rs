//! Rolling-file diagnostics for the note core.
//!
//! # Responsibility
//! - Start one `flexi_logger` file sink per process from host settings.
//! - Record where the note database lives and how that path was chosen.
//! - Capture panics without leaking note text into log files.
//!
//! # Invariants
//! - Only one log directory and level per process; repeating the same pair is a no-op.
//! - Quoted strings in panic payloads (note titles/bodies in `Debug` output)
//!   are replaced by their length before anything is written.
//! - Nothing here panics.

use crate::config::CoreConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "cleannote";
const ROTATE_AT_BYTES: u64 = 4 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 3;
const PANIC_SUMMARY_MAX_CHARS: usize = 200;

static ACTIVE_SINK: OnceCell<ActiveSink> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Verbosity accepted by `init_logging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `Debug` for debug builds, `Info` for release builds.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "log level `{other}` is not one of trace, debug, info, warn, error"
            )),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

struct ActiveSink {
    level: LogLevel,
    dir: PathBuf,
    _handle: LoggerHandle,
}

impl ActiveSink {
    fn accepts(&self, level: LogLevel, dir: &Path) -> Result<(), String> {
        if self.dir != dir {
            return Err(format!(
                "note logs already go to `{}`; cannot move them to `{}`",
                self.dir.display(),
                dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "note logs already run at `{}`; cannot change to `{}`",
                self.level, level
            ));
        }
        Ok(())
    }
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unknown level, blank or relative directory.
/// - Directory creation or logger start-up failure.
/// - A sink with a different level or directory is already running.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = level.parse::<LogLevel>()?;
    let dir = parse_log_dir(log_dir)?;

    if let Some(sink) = ACTIVE_SINK.get() {
        return sink.accepts(level, &dir);
    }

    let sink = ACTIVE_SINK.get_or_try_init(|| start_sink(level, &dir))?;
    sink.accepts(level, &dir)
}

/// Starts file logging from host configuration and records the note
/// database location.
///
/// Returns `Ok(false)` without touching global state when no log directory
/// is configured.
pub fn init_logging_from_config(config: &CoreConfig) -> Result<bool, String> {
    let Some(log_dir) = config.log_dir.as_deref() else {
        return Ok(false);
    };
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", log_dir.display()))?;

    init_logging(&config.log_level, log_dir)?;
    info!(
        "event=config_resolved module=core status=ok db_path_source={} db_path={}",
        config.db_path_source.as_str(),
        config.db_path.display()
    );
    Ok(true)
}

/// Returns `(level, log_dir)` of the running sink, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_SINK
        .get()
        .map(|sink| (sink.level.as_str(), sink.dir.clone()))
}

/// Level used when the host does not configure one.
pub fn default_log_level() -> &'static str {
    LogLevel::for_build().as_str()
}

fn start_sink(level: LogLevel, dir: &Path) -> Result<ActiveSink, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log dir `{}`: {err}", dir.display()))?;

    let handle = Logger::try_with_str(level.as_str())
        .map_err(|err| format!("logger rejected level `{level}`: {err}"))?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEPT_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("logger start-up failed: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_started module=core status=ok level={} dir={} os={} core_version={}",
        level,
        dir.display(),
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveSink {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("log dir is blank".to_string());
    }
    let dir = PathBuf::from(trimmed);
    if dir.is_relative() {
        return Err(format!("log dir `{trimmed}` is relative; an absolute path is required"));
    }
    Ok(dir)
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        let raw = info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<non-string payload>".to_string());
        error!(
            "event=panic module=core status=error location={} payload={}",
            location,
            summarize_panic(&raw)
        );
        previous(info);
    }));
}

fn summarize_panic(raw: &str) -> String {
    let flat = redact_quoted(raw).replace(['\n', '\r'], " ");
    if flat.chars().count() <= PANIC_SUMMARY_MAX_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(PANIC_SUMMARY_MAX_CHARS).collect();
    cut.push_str("...");
    cut
}

/// Replaces each `"..."` segment with its character count, honoring `\"`.
fn redact_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '"' {
            out.push(ch);
            continue;
        }

        let mut hidden = 0usize;
        let mut closed = false;
        while let Some(inner) = chars.next() {
            match inner {
                '\\' => {
                    chars.next();
                    hidden += 1;
                }
                '"' => {
                    closed = true;
                    break;
                }
                _ => hidden += 1,
            }
        }
        out.push_str(&format!("\"<{hidden} chars>"));
        if closed {
            out.push('"');
        }
    }
    out
}
