// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing the commit-msg hook.

use crate::error::{CfError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the hook commitfmt installs.
pub const HOOK_NAME: &str = "commit-msg";

/// Marker line identifying a hook written by commitfmt.
const HOOK_MARKER: &str = "# commitfmt commit-msg hook";

/// Generate the commit-msg hook script.
pub fn hook_script() -> String {
    format!(
        "#!/bin/sh\n{}\n# Generated by commitfmt v{}\n\nexec commitfmt check --strip-comments \"$1\"\n",
        HOOK_MARKER,
        crate::version::VERSION
    )
}

/// Manager for the commit-msg hook of one repository.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Ok(Self::for_hooks_dir(repo.hooks_dir()))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn for_hooks_dir(hooks_dir: impl Into<PathBuf>) -> Self {
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

    /// Install the hook, backing up a foreign hook when `force` is set.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        if !self.hooks_dir.exists() {
            fs::create_dir_all(&self.hooks_dir)
                .map_err(|e| install_failed(format!("Failed to create hooks directory: {}", e)))?;
        }

        if hook_path.exists() && !self.is_own_hook(&hook_path)? {
            if !force {
                return Err(CfError::Hook(HookError::AlreadyExists {
                    hook: HOOK_NAME.to_string(),
                }));
            }
            tracing::debug!("Backing up existing hook to {:?}", self.backup_path());
            fs::rename(&hook_path, self.backup_path())
                .map_err(|e| install_failed(format!("Failed to backup existing hook: {}", e)))?;
        }

        fs::write(&hook_path, hook_script())
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;
        make_executable(&hook_path)?;

        Ok(())
    }

    /// Remove the hook and restore any backup. A foreign hook is left alone.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(());
        }

        if !self.is_own_hook(&hook_path)? {
            return Err(CfError::Hook(HookError::RemoveFailed {
                hook: HOOK_NAME.to_string(),
                message: "Hook was not installed by commitfmt".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            CfError::Hook(HookError::RemoveFailed {
                hook: HOOK_NAME.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                CfError::Hook(HookError::RemoveFailed {
                    hook: HOOK_NAME.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Whether the commitfmt hook is installed.
    pub fn is_installed(&self) -> Result<bool> {
        let hook_path = self.hook_path();
        Ok(hook_path.exists() && self.is_own_hook(&hook_path)?)
    }

    fn is_own_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path)?;
        Ok(content.contains(HOOK_MARKER))
    }
}

fn install_failed(message: String) -> CfError {
    CfError::Hook(HookError::InstallFailed {
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
