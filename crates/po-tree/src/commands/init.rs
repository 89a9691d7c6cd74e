//! Init command: create the tree, extract the template, seed the first branch.

use crate::commands::{TreeArgs, report_dir};
use crate::core::{CliError, LocaleCode, SourceFile};
use crate::gettext;
use crate::utils::ui;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Locale code for the first branch (e.g. fr_FR).
    pub locale: String,

    /// Python source file to extract translatable strings from.
    pub source: PathBuf,

    #[command(flatten)]
    pub tree: TreeArgs,
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<(), CliError> {
    // Validate everything up front; a failed validation performs no
    // filesystem mutation at all.
    let locale: LocaleCode = args.locale.parse()?;
    let source = SourceFile::try_from(args.source)?;
    let tree = args.tree.resolve();

    ui::print_init_header();

    let (dir, status) = tree.ensure_locales_dir()?;
    report_dir(&dir, status);
    for (dir, status) in tree.ensure_branch(&locale)? {
        report_dir(&dir, status);
    }

    // Extraction is best-effort; the seed copy below still needs a template
    // on disk and fails with its own diagnostic when there is none.
    ui::print_extracting(source.path());
    if let Err(err) = gettext::extract_template(&tree, source.path()) {
        ui::print_tool_failed(&err);
    }

    tree.seed_catalog(&locale)?;
    ui::print_seeded_catalog(locale.as_str());
    ui::print_initialized(locale.as_str());
    Ok(())
}
