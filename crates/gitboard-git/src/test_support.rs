//! Test helpers for creating git repositories and changes.
//!
//! These functions wrap git2 operations so test code outside this crate
//! doesn't need to import git2 directly.

use std::fs;
use std::path::Path;

use git2::{IndexAddOption, Repository, RepositoryInitOptions, Signature};

use crate::errors::GitError;

fn signature(repo: &Repository) -> Result<Signature<'static>, GitError> {
    match repo.signature() {
        Ok(sig) => Ok(sig.to_owned()),
        Err(_) => Ok(Signature::now("Test", "test@test.com")?),
    }
}

/// Initialize an empty repository whose unborn `HEAD` points at `branch`.
pub fn init_repo_on_branch(path: &Path, branch: &str) -> Result<(), GitError> {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(branch);
    Repository::init_opts(path, &opts)?;
    Ok(())
}

/// Initialize a new git repository at the given path with an initial commit.
pub fn init_repo_with_commit(path: &Path) -> Result<(), GitError> {
    init_repo_on_branch(path, "main")?;
    commit_all(path, "Initial commit")
}

/// Stage everything in the working tree and commit it on `HEAD`.
pub fn commit_all(path: &Path, message: &str) -> Result<(), GitError> {
    let repo = Repository::open(path)?;
    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.update_all(["*"].iter(), None)?;
    index.write()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    let sig = signature(&repo)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(_) => None,
    };
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;
    Ok(())
}

/// Write `contents` to `relative` inside the working tree, creating parents.
pub fn write_file(root: &Path, relative: &str, contents: &str) -> Result<(), GitError> {
    let target = root.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, contents)?;
    Ok(())
}

/// Create a branch at HEAD and switch `HEAD` to it.
pub fn checkout_new_branch(path: &Path, name: &str) -> Result<(), GitError> {
    let repo = Repository::open(path)?;
    let commit = repo.head()?.peel_to_commit()?;
    repo.branch(name, &commit, false)?;
    repo.set_head(&format!("refs/heads/{}", name))?;
    Ok(())
}

/// Point `HEAD` directly at the current commit.
pub fn detach_head(path: &Path) -> Result<(), GitError> {
    let repo = Repository::open(path)?;
    let oid = repo.head()?.peel_to_commit()?.id();
    repo.set_head_detached(oid)?;
    Ok(())
}

/// Rename a committed file and stage the move, like `git mv`.
pub fn stage_rename(root: &Path, from: &str, to: &str) -> Result<(), GitError> {
    let repo = Repository::open(root)?;
    fs::rename(root.join(from), root.join(to))?;
    let mut index = repo.index()?;
    index.remove_path(Path::new(from))?;
    index.add_path(Path::new(to))?;
    index.write()?;
    Ok(())
}
