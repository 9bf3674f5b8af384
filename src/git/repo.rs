// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery.

use crate::error::{CommitMsgError, GitError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CommitMsgError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = Git2Repo::discover(path).map_err(GitError::from)?;
        tracing::debug!("Opened repository at {:?}", inner.path());
        Ok(Self { inner })
    }

    /// The `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Where git looks for hook scripts.
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir().join("hooks")
    }
}

/// Open the repository for the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let nested = dir.path().join("src");
        std::fs::create_dir(&nested).unwrap();

        let repo = Repository::open(&nested).unwrap();
        assert!(repo.hooks_dir().ends_with(".git/hooks"));
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CommitMsgError::Git(GitError::NotARepository))
        ));
    }
}
