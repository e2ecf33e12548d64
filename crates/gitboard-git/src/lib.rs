//! gitboard-git: working tree status queries for gitboard.
//!
//! Wraps libgit2 behind the [`StatusProvider`] / [`WorkingTree`] traits so
//! the rest of the workspace never touches git2 types.

pub mod errors;
pub mod provider;
pub mod test_support;
pub mod types;

pub use errors::GitError;
pub use provider::{GitStatusProvider, GitWorkingTree, StatusProvider, WorkingTree, change_flags};
pub use types::{ChangeFlags, StatusRecord, short_branch_name};
