use std::path::PathBuf;

/// Application directory name under the config and cache roots
const APP_DIR: &str = "courseoutline";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/courseoutline, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join(APP_DIR)
}

/// Get the config file path (always ~/.config/courseoutline/config.toml, regardless of OS)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory the log file is written to (platform cache dir, home as fallback)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join(APP_DIR)
}

/// Name of the log file inside [`get_log_dir`]
pub const LOG_FILE_NAME: &str = "courseoutline.log";

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str == "~" {
        get_home_dir()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else {
        PathBuf::from(path_str)
    }
}
