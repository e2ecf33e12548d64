//! git2-backed status provider.
//!
//! All git2 types stay contained here — callers only deal with
//! [`StatusRecord`], [`ChangeFlags`] and [`GitError`].

use std::path::{Path, PathBuf};

use git2::{Repository, Status, StatusOptions};
use tracing::debug;

use crate::errors::GitError;
use crate::types::{ChangeFlags, StatusRecord};

/// Opens directories as working trees.
///
/// Implementations are shared across concurrently running probes, so they
/// must be `Send + Sync`. The opened tree itself never leaves the thread
/// that opened it.
pub trait StatusProvider: Send + Sync + 'static {
    type Tree: WorkingTree;

    fn open(&self, path: &Path) -> Result<Self::Tree, GitError>;
}

/// An opened working tree that can be queried for changes.
pub trait WorkingTree {
    /// Every changed path in the tree, untracked files included.
    fn status(&self) -> Result<Vec<StatusRecord>, GitError>;

    /// The full branch identifier `HEAD` points at, or `""` when detached.
    fn current_branch(&self) -> Result<String, GitError>;
}

/// Status provider backed by libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitStatusProvider;

impl StatusProvider for GitStatusProvider {
    type Tree = GitWorkingTree;

    fn open(&self, path: &Path) -> Result<GitWorkingTree, GitError> {
        if !path.exists() {
            return Err(GitError::RepositoryNotFound {
                path: path.display().to_string(),
            });
        }

        let repo = Repository::open(path).map_err(|e| GitError::OpenFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        debug!(
            event = "git.provider.repo_opened",
            path = %path.display()
        );

        Ok(GitWorkingTree {
            repo,
            path: path.to_path_buf(),
        })
    }
}

pub struct GitWorkingTree {
    repo: Repository,
    path: PathBuf,
}

impl WorkingTree for GitWorkingTree {
    fn status(&self) -> Result<Vec<StatusRecord>, GitError> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);
        opts.renames_head_to_index(true);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|e| GitError::StatusFailed {
                path: self.path.display().to_string(),
                source: e,
            })?;

        // Typechange and conflicted entries carry no flag but are still changes.
        let records = statuses
            .iter()
            .filter(|entry| !entry.status().contains(Status::IGNORED))
            .map(|entry| {
                let path = String::from_utf8_lossy(entry.path_bytes()).into_owned();
                StatusRecord::new(path, change_flags(entry.status()))
            })
            .collect();

        Ok(records)
    }

    fn current_branch(&self) -> Result<String, GitError> {
        // HEAD's symbolic target is readable even before the first commit,
        // unlike `Repository::head()`.
        let head = self
            .repo
            .find_reference("HEAD")
            .map_err(|e| GitError::HeadFailed {
                path: self.path.display().to_string(),
                source: e,
            })?;

        Ok(head.symbolic_target().unwrap_or_default().to_string())
    }
}

/// Map libgit2 status bits onto the four dashboard categories.
///
/// Index and worktree variants of the same change collapse into one flag.
pub fn change_flags(status: Status) -> ChangeFlags {
    ChangeFlags {
        new: status.intersects(Status::INDEX_NEW | Status::WT_NEW),
        modified: status.intersects(Status::INDEX_MODIFIED | Status::WT_MODIFIED),
        deleted: status.intersects(Status::INDEX_DELETED | Status::WT_DELETED),
        renamed: status.intersects(Status::INDEX_RENAMED | Status::WT_RENAMED),
    }
}
