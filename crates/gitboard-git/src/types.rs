use std::path::PathBuf;

/// Change categories a single status record can carry.
///
/// A record may carry more than one flag (e.g. a staged rename that was
/// edited afterwards is both `renamed` and `modified`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeFlags {
    pub new: bool,
    pub modified: bool,
    pub deleted: bool,
    pub renamed: bool,
}

impl ChangeFlags {
    pub const NEW: Self = Self {
        new: true,
        modified: false,
        deleted: false,
        renamed: false,
    };
    pub const MODIFIED: Self = Self {
        new: false,
        modified: true,
        deleted: false,
        renamed: false,
    };
    pub const DELETED: Self = Self {
        new: false,
        modified: false,
        deleted: true,
        renamed: false,
    };
    pub const RENAMED: Self = Self {
        new: false,
        modified: false,
        deleted: false,
        renamed: true,
    };

    /// True when no recognised change category is set.
    pub fn is_empty(&self) -> bool {
        !(self.new || self.modified || self.deleted || self.renamed)
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            new: self.new || other.new,
            modified: self.modified || other.modified,
            deleted: self.deleted || other.deleted,
            renamed: self.renamed || other.renamed,
        }
    }
}

/// One changed path inside a working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    /// Path relative to the working tree root.
    pub path: PathBuf,
    pub flags: ChangeFlags,
}

impl StatusRecord {
    pub fn new(path: impl Into<PathBuf>, flags: ChangeFlags) -> Self {
        Self {
            path: path.into(),
            flags,
        }
    }
}

/// Short display name of a branch identifier: its last `/`-separated segment.
///
/// `refs/heads/feature/login` becomes `login`; an empty identifier stays empty.
pub fn short_branch_name(identifier: &str) -> &str {
    identifier.rsplit('/').next().unwrap_or("")
}
