//! Server configuration.

use std::path::{Path, PathBuf};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATA_FILE: &str = "family1.json";

/// Default file for the editing commands.
pub const DEFAULT_EXPORT_FILE: &str = "family_tree.json";

/// Where the server listens, what `/save` writes and which directory is
/// served as static files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (from FAMILY_TREE_HOST)
    pub host: String,
    /// Listen port (from FAMILY_TREE_PORT)
    pub port: u16,
    /// Document written by `/save` (from FAMILY_TREE_DATA_FILE)
    pub data_file: PathBuf,
    /// Directory served for everything except the API (from FAMILY_TREE_STATIC_DIR)
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables. Unset or unparsable
    /// values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("FAMILY_TREE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = lookup("FAMILY_TREE_PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_file = lookup("FAMILY_TREE_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let static_dir = lookup("FAMILY_TREE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            host,
            port,
            data_file,
            static_dir,
        }
    }

    /// A config writing to `data_file` and serving `static_dir` (for tests).
    pub fn with_paths(data_file: impl Into<PathBuf>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: data_file.into(),
            static_dir: static_dir.into(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn backup_path(&self) -> PathBuf {
        backup_path(&self.data_file)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The single-generation backup sibling: `family1.json` -> `family1.json.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".bak");
    PathBuf::from(raw)
}
