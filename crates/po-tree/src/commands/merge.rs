//! Merge command: re-extract the template and fold new keys into every branch.

use crate::commands::TreeArgs;
use crate::core::CliError;
use crate::gettext;
use crate::utils::ui;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the merge command.
#[derive(Debug, Parser)]
pub struct MergeArgs {
    /// Source file to re-extract the template from.
    pub source: PathBuf,

    #[command(flatten)]
    pub tree: TreeArgs,
}

/// Run the merge command.
///
/// Existing translations are preserved; msgmerge adds newly extracted keys to
/// each branch's catalog with empty translations. A branch that fails to
/// merge is reported and skipped.
pub fn run_merge(args: MergeArgs) -> Result<(), CliError> {
    let tree = args.tree.resolve();

    ui::print_merge_header();

    ui::print_extracting(&args.source);
    if let Err(err) = gettext::extract_template(&tree, &args.source) {
        ui::print_tool_failed(&err);
    }

    let branches = tree.branches()?;
    if branches.is_empty() {
        ui::print_no_branches();
        return Ok(());
    }

    let pb = ui::create_progress_bar(branches.len() as u64, "Merging branches...");
    let mut merged = 0;
    let mut failed = 0;

    for branch in &branches {
        pb.set_message(format!("Merging {branch}"));

        match gettext::merge_branch(&tree, branch) {
            Ok(_) => {
                merged += 1;
                pb.suspend(|| ui::print_merged(branch));
            },
            Err(err) => {
                failed += 1;
                pb.suspend(|| ui::print_branch_failed(branch, &err));
            },
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    ui::print_merge_summary(merged, failed);
    Ok(())
}
