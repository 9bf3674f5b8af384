// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing the commit-msg hook.

use crate::error::{CommitMsgError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{commit_msg_script, is_own_script, HOOK_NAME};

/// State of the commit-msg hook in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// Our hook is installed.
    Installed,
    /// Some other script occupies the hook.
    Foreign,
    /// No hook at all.
    Missing,
}

/// Manager for the commit-msg hook.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Ok(Self::at(repo.hooks_dir()))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn at(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", HOOK_NAME))
    }

    /// Install the hook. A foreign hook is only replaced with `force`, and
    /// is then kept as `commit-msg.backup`.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        if !self.hooks_dir.exists() {
            fs::create_dir_all(&self.hooks_dir)
                .map_err(|e| install_failed(format!("Failed to create hooks directory: {}", e)))?;
        }

        if self.status()? == HookStatus::Foreign {
            if !force {
                return Err(CommitMsgError::Hook(HookError::AlreadyExists {
                    hook: HOOK_NAME.to_string(),
                }));
            }

            let backup_path = self.backup_path();
            if backup_path.exists() {
                return Err(CommitMsgError::Hook(HookError::BackupExists {
                    path: backup_path,
                }));
            }

            tracing::debug!("Backing up existing hook to {:?}", backup_path);
            fs::rename(&hook_path, &backup_path)
                .map_err(|e| install_failed(format!("Failed to backup existing hook: {}", e)))?;
        }

        fs::write(&hook_path, commit_msg_script())
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;
        make_executable(&hook_path)?;

        tracing::debug!("Installed hook at {:?}", hook_path);
        Ok(())
    }

    /// Remove our hook and restore any backup.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::Missing => return Ok(()),
            HookStatus::Foreign => {
                return Err(CommitMsgError::Hook(HookError::RemoveFailed {
                    hook: HOOK_NAME.to_string(),
                    message: "Hook was not installed by validate-commit-msg".to_string(),
                }));
            }
            HookStatus::Installed => {}
        }

        fs::remove_file(&hook_path).map_err(|e| {
            CommitMsgError::Hook(HookError::RemoveFailed {
                hook: HOOK_NAME.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                CommitMsgError::Hook(HookError::RemoveFailed {
                    hook: HOOK_NAME.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Get the status of the hook. Any file without our marker, including
    /// a compiled binary, is foreign.
    pub fn status(&self) -> Result<HookStatus> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(HookStatus::Missing);
        }

        let content = fs::read(&hook_path).map_err(|e| {
            install_failed(format!("Failed to read {}: {}", hook_path.display(), e))
        })?;

        if is_own_script(&content) {
            Ok(HookStatus::Installed)
        } else {
            Ok(HookStatus::Foreign)
        }
    }
}

fn install_failed(message: String) -> CommitMsgError {
    CommitMsgError::Hook(HookError::InstallFailed {
        hook: HOOK_NAME.to_string(),
        message,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
        .permissions();

    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
