#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Repository not found at path: {path}")]
    RepositoryNotFound { path: String },

    #[error("Failed to open repository at {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to read status for {path}: {source}")]
    StatusFailed {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to resolve HEAD for {path}: {source}")]
    HeadFailed {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Git2 library error: {source}")]
    Git2Error {
        #[from]
        source: git2::Error,
    },

    #[error("IO error during git operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
