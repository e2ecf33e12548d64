//! Per-directory summaries and the snapshots that group them.

use std::fmt;
use std::ops::Add;
use std::path::{Path, PathBuf};

/// Uncommitted change counts for one working tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    pub added: u32,
    pub removed: u32,
    pub edited: u32,
    pub renamed: u32,
    /// Records outside the four categories (typechange, conflict). Never
    /// displayed, but they keep the tree from reading as clean.
    pub unclassified: u32,
}

impl ChangeCounts {
    /// Sum of the four displayed categories.
    pub fn total(&self) -> u32 {
        self.added + self.removed + self.edited + self.renamed
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0 && self.unclassified == 0
    }
}

impl Add for ChangeCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            added: self.added + rhs.added,
            removed: self.removed + rhs.removed,
            edited: self.edited + rhs.edited,
            renamed: self.renamed + rhs.renamed,
            unclassified: self.unclassified + rhs.unclassified,
        }
    }
}

/// Why a directory could not be summarised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeFailure {
    /// Not a working tree, missing, or inaccessible.
    Open,
    /// Opened, but the status or branch query failed.
    Status,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::Open => write!(f, "open failure"),
            ProbeFailure::Status => write!(f, "status failure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryState {
    Ready { branch: String, counts: ChangeCounts },
    Failed(ProbeFailure),
}

/// Row-level health used to pick the status glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Clean,
    Dirty,
    Failed,
}

/// Summary of one monitored directory as of a single refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    path: PathBuf,
    state: EntryState,
}

impl DirectoryEntry {
    pub fn ready(path: impl Into<PathBuf>, branch: impl Into<String>, counts: ChangeCounts) -> Self {
        Self {
            path: path.into(),
            state: EntryState::Ready {
                branch: branch.into(),
                counts,
            },
        }
    }

    pub fn failed(path: impl Into<PathBuf>, failure: ProbeFailure) -> Self {
        Self {
            path: path.into(),
            state: EntryState::Failed(failure),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &EntryState {
        &self.state
    }

    /// Base name of the path, falling back to the full path for roots.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Short branch name; empty when unavailable or failed.
    pub fn branch(&self) -> &str {
        match &self.state {
            EntryState::Ready { branch, .. } => branch,
            EntryState::Failed(_) => "",
        }
    }

    /// Change counts; all zero for a failed entry.
    pub fn counts(&self) -> ChangeCounts {
        match &self.state {
            EntryState::Ready { counts, .. } => *counts,
            EntryState::Failed(_) => ChangeCounts::default(),
        }
    }

    pub fn error(&self) -> Option<ProbeFailure> {
        match &self.state {
            EntryState::Ready { .. } => None,
            EntryState::Failed(failure) => Some(*failure),
        }
    }

    pub fn health(&self) -> Health {
        match &self.state {
            EntryState::Failed(_) => Health::Failed,
            EntryState::Ready { counts, .. } if counts.is_clean() => Health::Clean,
            EntryState::Ready { .. } => Health::Dirty,
        }
    }
}

/// Every configured directory's entry from one refresh cycle, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cycle: u64,
    entries: Vec<DirectoryEntry>,
}

impl Snapshot {
    pub fn new(cycle: u64, entries: Vec<DirectoryEntry>) -> Self {
        Self { cycle, entries }
    }

    /// Number of the refresh cycle that produced this snapshot (1-based).
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summed counts over entries that were probed successfully.
    pub fn totals(&self) -> ChangeCounts {
        self.entries
            .iter()
            .filter(|entry| entry.error().is_none())
            .fold(ChangeCounts::default(), |acc, entry| acc + entry.counts())
    }

    pub fn dirty_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.health() == Health::Dirty)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.health() == Health::Failed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(added: u32, removed: u32, edited: u32, renamed: u32) -> ChangeCounts {
        ChangeCounts {
            added,
            removed,
            edited,
            renamed,
            ..ChangeCounts::default()
        }
    }

    #[test]
    fn test_failed_entry_has_no_counts_or_branch() {
        for failure in [ProbeFailure::Open, ProbeFailure::Status] {
            let entry = DirectoryEntry::failed("/tmp/broken", failure);
            assert_eq!(entry.counts(), ChangeCounts::default());
            assert_eq!(entry.branch(), "");
            assert_eq!(entry.error(), Some(failure));
            assert_eq!(entry.health(), Health::Failed);
        }
    }

    #[test]
    fn test_health_clean_vs_dirty() {
        let clean = DirectoryEntry::ready("/src/a", "main", ChangeCounts::default());
        assert_eq!(clean.health(), Health::Clean);

        let dirty = DirectoryEntry::ready("/src/b", "main", counts(0, 0, 0, 1));
        assert_eq!(dirty.health(), Health::Dirty);
    }

    #[test]
    fn test_unclassified_changes_are_dirty() {
        let typechange = ChangeCounts {
            unclassified: 1,
            ..ChangeCounts::default()
        };
        let entry = DirectoryEntry::ready("/src/c", "main", typechange);

        assert_eq!(entry.health(), Health::Dirty);
        assert_eq!(entry.counts().total(), 0);
    }

    #[test]
    fn test_display_name_is_base_name() {
        let entry = DirectoryEntry::ready("/home/me/src/gitboard", "", ChangeCounts::default());
        assert_eq!(entry.display_name(), "gitboard");

        let root = DirectoryEntry::failed("/", ProbeFailure::Open);
        assert_eq!(root.display_name(), "/");
    }

    #[test]
    fn test_totals_skip_failed_entries() {
        let snapshot = Snapshot::new(
            3,
            vec![
                DirectoryEntry::ready("/a", "main", counts(2, 0, 1, 0)),
                DirectoryEntry::failed("/b", ProbeFailure::Status),
                DirectoryEntry::ready("/c", "dev", counts(1, 1, 0, 2)),
                DirectoryEntry::ready("/d", "dev", ChangeCounts::default()),
            ],
        );

        assert_eq!(snapshot.cycle(), 3);
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.totals(), counts(3, 1, 1, 2));
        assert_eq!(snapshot.dirty_count(), 2);
        assert_eq!(snapshot.failed_count(), 1);
    }

    #[test]
    fn test_probe_failure_display() {
        assert_eq!(ProbeFailure::Open.to_string(), "open failure");
        assert_eq!(ProbeFailure::Status.to_string(), "status failure");
    }
}
