// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CfError, GitError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository for reading commit messages.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CfError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CfError::Git(GitError::NotARepository)
            } else {
                CfError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get the hooks directory.
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir().join("hooks")
    }

    /// Path of the message file git hands to the commit-msg hook.
    pub fn commit_editmsg_path(&self) -> PathBuf {
        self.git_dir().join("COMMIT_EDITMSG")
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CfError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CfError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commit id and message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<(String, String)> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            CfError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;
        Ok((commit.id().to_string(), message.to_string()))
    }

    /// Get commits in an `A..B` range, newest first.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(String, String)>> {
        let (from, to) = match range.split_once("..") {
            Some((from, to)) => (from, to),
            None => return Ok(vec![self.get_commit_message(range)?]),
        };
        let to = if to.is_empty() { "HEAD" } else { to };

        let mut revwalk = self.inner.revwalk().map_err(|e| command_failed("revwalk", e))?;
        revwalk
            .push(self.get_commit(to)?.id())
            .map_err(|e| command_failed("revwalk.push", e))?;
        revwalk
            .hide(self.get_commit(from)?.id())
            .map_err(|e| command_failed("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| command_failed("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                CfError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            let message = commit.message().unwrap_or("").to_string();
            commits.push((oid.to_string(), message));
        }

        Ok(commits)
    }
}

fn command_failed(command: &str, err: git2::Error) -> CfError {
    CfError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: err.message().to_string(),
    })
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Get the commit id and message for a reference.
pub fn get_commit_message(reference: &str) -> Result<(String, String)> {
    let repo = Repository::open_current()?;
    repo.get_commit_message(reference)
}

/// Get commits in a range.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    repo.get_commits_in_range(range)
}
