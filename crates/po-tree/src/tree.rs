//! Locale-tree layout and directory/file primitives.
//!
//! The tree is the conventional gettext layout, rooted at the working
//! directory:
//!
//! ```text
//! locales/
//!   base.pot
//!   <locale>/LC_MESSAGES/
//!     base.po
//!     base.mo
//! ```
//!
//! All state lives on the filesystem and is re-discovered on every run by
//! enumerating `locales/`.

use crate::core::{CliError, LocaleCode, NotADirectoryError, TemplateMissingError};
use fs_err as fs;
use std::path::{Path, PathBuf};

/// Top-level directory holding the template and all locale branches.
pub const LOCALES_DIR: &str = "locales";
/// The extracted message template.
pub const TEMPLATE_FILE: &str = "base.pot";
/// Per-branch editable catalog.
pub const CATALOG_FILE: &str = "base.po";
/// Per-branch compiled catalog.
pub const COMPILED_FILE: &str = "base.mo";
/// Subdirectory gettext expects inside each branch.
pub const MESSAGES_DIR: &str = "LC_MESSAGES";
/// Catalog path without extension, the way msgfmt takes its input.
pub const CATALOG_STEM: &str = "base";

/// Outcome of an idempotent directory-creation call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Path layout and filesystem primitives for one translation tree.
#[derive(Clone, Debug)]
pub struct LocaleTree {
    root: PathBuf,
}

impl LocaleTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.root.join(LOCALES_DIR)
    }

    pub fn template_path(&self) -> PathBuf {
        self.locales_dir().join(TEMPLATE_FILE)
    }

    /// `locales/<branch>`. Branch names are plain directory names here;
    /// enumeration does not re-validate the 5-character convention.
    pub fn branch_dir(&self, branch: &str) -> PathBuf {
        self.locales_dir().join(branch)
    }

    pub fn messages_dir(&self, branch: &str) -> PathBuf {
        self.branch_dir(branch).join(MESSAGES_DIR)
    }

    pub fn catalog_path(&self, branch: &str) -> PathBuf {
        self.messages_dir(branch).join(CATALOG_FILE)
    }

    pub fn compiled_path(&self, branch: &str) -> PathBuf {
        self.messages_dir(branch).join(COMPILED_FILE)
    }

    /// The catalog path without its `.po` extension, for msgfmt.
    pub fn catalog_stem(&self, branch: &str) -> PathBuf {
        self.messages_dir(branch).join(CATALOG_STEM)
    }

    /// Create `path` if it is not already a directory.
    ///
    /// Pre-existence is the expected idempotent case and reports
    /// [`DirStatus::AlreadyExists`]; a path that exists but is not a
    /// directory is an error.
    pub fn ensure_dir(path: &Path) -> Result<DirStatus, CliError> {
        if path.is_dir() {
            return Ok(DirStatus::AlreadyExists);
        }
        if path.exists() {
            return Err(NotADirectoryError {
                path: path.to_path_buf(),
            }
            .into());
        }
        fs::create_dir(path)?;
        Ok(DirStatus::Created)
    }

    pub fn ensure_locales_dir(&self) -> Result<(PathBuf, DirStatus), CliError> {
        let dir = self.locales_dir();
        let status = Self::ensure_dir(&dir)?;
        Ok((dir, status))
    }

    /// Create a branch's two-level directory structure, outer then inner.
    ///
    /// Returns the per-directory statuses in creation order so callers can
    /// report created vs pre-existing paths.
    pub fn ensure_branch(&self, locale: &LocaleCode) -> Result<Vec<(PathBuf, DirStatus)>, CliError> {
        let branch = self.branch_dir(locale.as_str());
        let messages = self.messages_dir(locale.as_str());

        let mut statuses = Vec::with_capacity(2);
        let status = Self::ensure_dir(&branch)?;
        statuses.push((branch, status));
        let status = Self::ensure_dir(&messages)?;
        statuses.push((messages, status));
        Ok(statuses)
    }

    /// Copy the current template over the branch's `base.po`.
    ///
    /// The copy is an unconditional overwrite: the last extraction wins for a
    /// freshly seeded branch. Fails with a template diagnostic rather than a
    /// raw copy error when `base.pot` has not been extracted yet.
    pub fn seed_catalog(&self, locale: &LocaleCode) -> Result<(), CliError> {
        let template = self.template_path();
        if !template.is_file() {
            return Err(TemplateMissingError { path: template }.into());
        }
        fs::copy(&template, self.catalog_path(locale.as_str()))?;
        Ok(())
    }

    /// All locale branches currently in the tree.
    ///
    /// Every immediate subdirectory of `locales/` counts as a branch; files
    /// (the template itself) are ignored. Sorted for a deterministic
    /// processing order. An absent `locales/` yields an empty list.
    pub fn branches(&self) -> Result<Vec<String>, CliError> {
        let locales_dir = self.locales_dir();
        let mut branches = Vec::new();

        if !locales_dir.exists() {
            return Ok(branches);
        }

        for entry in fs::read_dir(&locales_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir()
                && let Some(name) = entry.file_name().to_str()
            {
                branches.push(name.to_string());
            }
        }

        branches.sort();
        Ok(branches)
    }
}
