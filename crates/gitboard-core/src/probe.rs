//! Per-directory status probing.
//!
//! A probe never fails: provider errors are captured here and carried as
//! [`ProbeFailure`] data so one broken directory cannot abort a cycle.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use gitboard_git::{StatusProvider, WorkingTree, short_branch_name};
use tracing::{debug, warn};

use crate::model::{DirectoryEntry, ProbeFailure};
use crate::stats::aggregate;

/// Produces a [`DirectoryEntry`] for one directory.
pub trait Probe: Send + Sync + 'static {
    fn probe(&self, path: &Path) -> impl Future<Output = DirectoryEntry> + Send;
}

/// Probe backed by a [`StatusProvider`].
///
/// Provider calls are blocking, so each probe runs on tokio's blocking pool
/// and many directories can be pending at once.
pub struct StatusProbe<S> {
    provider: Arc<S>,
}

impl<S: StatusProvider> StatusProbe<S> {
    pub fn new(provider: S) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

impl<S: StatusProvider> Probe for StatusProbe<S> {
    fn probe(&self, path: &Path) -> impl Future<Output = DirectoryEntry> + Send {
        let provider = Arc::clone(&self.provider);
        let path = path.to_path_buf();

        async move {
            let task_path = path.clone();
            match tokio::task::spawn_blocking(move || probe_blocking(provider.as_ref(), task_path))
                .await
            {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(
                        event = "core.probe.task_failed",
                        path = %path.display(),
                        error = %e
                    );
                    DirectoryEntry::failed(path, ProbeFailure::Status)
                }
            }
        }
    }
}

/// Open, query status and branch, and summarise one directory.
pub fn probe_blocking<S: StatusProvider>(provider: &S, path: PathBuf) -> DirectoryEntry {
    let tree = match provider.open(&path) {
        Ok(tree) => tree,
        Err(e) => {
            debug!(
                event = "core.probe.open_failed",
                path = %path.display(),
                error = %e
            );
            return DirectoryEntry::failed(path, ProbeFailure::Open);
        }
    };

    let summary = tree
        .status()
        .and_then(|records| Ok((records, tree.current_branch()?)));

    match summary {
        Ok((records, branch)) => {
            let counts = aggregate(&records);
            debug!(
                event = "core.probe.completed",
                path = %path.display(),
                records = records.len(),
                branch = %branch
            );
            DirectoryEntry::ready(path, short_branch_name(&branch), counts)
        }
        Err(e) => {
            warn!(
                event = "core.probe.status_failed",
                path = %path.display(),
                error = %e
            );
            DirectoryEntry::failed(path, ProbeFailure::Status)
        }
    }
}
