//! Tracing setup for the `huddle` binary.
//!
//! Events go to stderr in compact form. A project can also keep a JSON log
//! beside its session by setting `[logging] file = true`, which writes to
//! `<data>/logs/huddle.log` with daily rotation.

use crate::config::HuddleConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "huddle.log";

/// Resolved logging options for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct LogOptions {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl LogOptions {
    /// `--verbose` forces `debug`, and an explicit `--log-file` beats the
    /// project setting. Outside a huddle project only the flags apply.
    pub fn resolve(verbose: bool, log_file: Option<PathBuf>, start: &Path) -> Self {
        let project = HuddleConfig::load(start).ok();
        let level = match (&project, verbose) {
            (_, true) => "debug".to_string(),
            (Some((config, _)), false) => config.logging.level.clone(),
            (None, false) => "warn".to_string(),
        };
        let file = log_file.or_else(|| {
            project
                .filter(|(config, _)| config.logging.file)
                .map(|(config, root)| project_log_path(&config.data_path(&root)))
        });
        Self { level, file }
    }
}

pub fn project_log_path(data_path: &Path) -> PathBuf {
    data_path.join(LOG_DIR).join(LOG_FILE)
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("huddle={}", level)))
        .unwrap_or_else(|_| EnvFilter::new("huddle=warn"))
}

/// Install the global subscriber. Later calls leave the first one in place.
pub fn init(options: &LogOptions) {
    let registry = tracing_subscriber::registry()
        .with(env_filter(&options.level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        );

    let Some(path) = &options.file else {
        let _ = registry.try_init();
        return;
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("huddle: cannot create log directory {}: {}", dir.display(), e);
    }
    let file_name = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE));
    let appender = tracing_appender::rolling::daily(dir, file_name);

    let _ = registry
        .with(fmt::layer().with_writer(appender).with_ansi(false).json())
        .try_init();
}
