//! Configuration loading and database path resolution

use std::path::PathBuf;

/// Environment variable naming the scripture database file
pub const DB_ENV_VAR: &str = "GURBANI_DB";

/// Resolve the scripture database path, in priority order:
/// 1. Command-line argument (highest priority)
/// 2. `GURBANI_DB` environment variable
/// 3. `database` key in the TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_database_path(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DB_ENV_VAR) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(config_path) = config_file_path() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(database) = config.get("database").and_then(|v| v.as_str()) {
                    return PathBuf::from(database);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_database_path()
}

/// Configuration file location for the platform (`gurbani/config.toml`
/// under the user config directory)
fn config_file_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("gurbani").join("config.toml");
    path.exists().then_some(path)
}

/// Default database location under the platform data directory
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("gurbani").join("gurbani.db"))
        .unwrap_or_else(|| PathBuf::from("./gurbani.db"))
}
