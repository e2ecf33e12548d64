use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("home directory not found — set $HOME environment variable")]
    HomeNotFound,

    #[error("Failed to read config file '{}': {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {message}", path.display())]
    ParseFailed { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("No directories to monitor")]
    NoDirectories,

    #[error("Failed to repaint terminal: {source}")]
    Repaint {
        #[from]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
