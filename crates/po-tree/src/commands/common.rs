use crate::tree::{DirStatus, LocaleTree};
use crate::utils::ui;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments shared by every command.
#[derive(Debug, Clone, Args)]
pub struct TreeArgs {
    /// Path to the translation tree root (defaults to current directory).
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

impl TreeArgs {
    /// The tree this invocation operates on.
    pub fn resolve(&self) -> LocaleTree {
        LocaleTree::new(self.path.clone().unwrap_or_else(|| PathBuf::from(".")))
    }
}

/// Report the outcome of an idempotent directory-creation call.
pub fn report_dir(path: &Path, status: DirStatus) {
    match status {
        DirStatus::Created => ui::print_created_dir(path),
        DirStatus::AlreadyExists => ui::print_dir_exists(path),
    }
}
