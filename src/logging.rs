//! Tracing setup.
//!
//! The TUI owns stdout, so log lines go to a file. `RUST_LOG` overrides the
//! default filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "rpg_forum=info";

const LOG_FILE_NAME: &str = "rpg-forum.log";

/// `<data dir>/rpg-forum/rpg-forum.log`, falling back to the temp dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("rpg-forum"))
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE_NAME)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build a subscriber that writes plain-text lines to `file`.
pub fn file_subscriber(
    file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(Mutex::new(file))
            .with_filter(filter),
    )
}

/// Install the global subscriber. Returns the path being written to.
pub fn init_logging(path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = file_subscriber(file, env_filter()).try_init();
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(path)
}
