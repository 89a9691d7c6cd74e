//! Add command: seed a new locale branch from the current template.

use crate::commands::{TreeArgs, report_dir};
use crate::core::{CliError, LocaleCode, TemplateMissingError};
use crate::utils::ui;
use clap::Parser;

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Locale code for the new branch (e.g. en_US).
    pub locale: String,

    #[command(flatten)]
    pub tree: TreeArgs,
}

/// Run the add command.
pub fn run_add(args: AddArgs) -> Result<(), CliError> {
    let locale: LocaleCode = args.locale.parse()?;
    let tree = args.tree.resolve();

    ui::print_add_header();

    // Checked before the branch directories are created so a tree that was
    // never initialized is left untouched.
    let template = tree.template_path();
    if !template.is_file() {
        return Err(TemplateMissingError { path: template }.into());
    }

    for (dir, status) in tree.ensure_branch(&locale)? {
        report_dir(&dir, status);
    }

    tree.seed_catalog(&locale)?;
    ui::print_seeded_catalog(locale.as_str());
    ui::print_added(locale.as_str());
    Ok(())
}
