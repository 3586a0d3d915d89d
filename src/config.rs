use std::path::PathBuf;

// =============================================================================
// Descriptor lookup constants
// =============================================================================

/// Directory name a module loader appends to each ancestor of the entry module
pub const MODULES_DIR_NAME: &str = "node_modules";

/// Package descriptor expected as a sibling of a `node_modules` directory
pub const DESCRIPTOR_FILE_NAME: &str = "package.json";

/// Label shown by a host CLI when no version could be resolved
pub const UNKNOWN_VERSION: &str = "unknown";

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the path to the data directory for pkg-version-probe.
/// Uses $XDG_DATA_HOME/pkg-version-probe if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/pkg-version-probe,
/// or ./pkg-version-probe if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("pkg-version-probe.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("pkg-version-probe")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/pkg-version-probe"));
    }

    #[test]
    fn data_dir_with_env_ignores_empty_xdg_data_home() {
        let path = data_dir_with_env(Some(String::new()), Some(PathBuf::from("/home/user")));

        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/pkg-version-probe")
        );
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/pkg-version-probe")
        );
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./pkg-version-probe"));
    }
}
