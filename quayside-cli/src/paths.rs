//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::debug;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "quayside";
const APPLICATION: &str = "quayside";

/// Name of the active log file inside the cache directory.
const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs are written.
///
/// - Linux: `$XDG_CACHE_HOME/quayside` or `~/.cache/quayside`
/// - macOS: `~/Library/Caches/dev.quayside.quayside`
/// - Windows: `C:\Users\<User>\AppData\Local\quayside\quayside\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/quayside` or `~/.config/quayside`
/// - macOS: `~/Library/Application Support/dev.quayside.quayside`
/// - Windows: `C:\Users\<User>\AppData\Roaming\quayside\quayside\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the default config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the path to the latest log file inside a cache directory.
pub fn log_file(cache: &Path) -> PathBuf {
    cache.join(LATEST_LOG)
}

/// Rotate logs: rename latest.log to a timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs(cache: &Path) {
    let latest = log_file(cache);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{}.log", timestamp));
        if let Err(e) = fs::rename(&latest, &archived) {
            debug!("cannot archive {}: {}", latest.display(), e);
        }
    }

    cleanup_old_logs(cache, MAX_OLD_LOGS);
}

/// Remove old log files, keeping only the most recent `keep`.
fn cleanup_old_logs(cache: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            if let Err(e) = fs::remove_file(entry.path()) {
                debug!("cannot remove old log {}: {}", entry.path().display(), e);
            }
        }
    }
}
