//! Build command: compile every branch's catalog to a binary `.mo`.

use crate::commands::TreeArgs;
use crate::core::CliError;
use crate::gettext;
use crate::utils::ui;
use clap::Parser;

/// Arguments for the build command.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub tree: TreeArgs,
}

/// Run the build command.
///
/// Compiles whatever branches exist right now; a branch that fails to compile
/// is reported and skipped so the remaining branches still get built.
pub fn run_build(args: BuildArgs) -> Result<(), CliError> {
    let tree = args.tree.resolve();

    ui::print_build_header();

    let branches = tree.branches()?;
    if branches.is_empty() {
        ui::print_no_branches();
        return Ok(());
    }

    let pb = ui::create_progress_bar(branches.len() as u64, "Compiling branches...");
    let mut compiled = 0;
    let mut failed = 0;

    for branch in &branches {
        pb.set_message(format!("Compiling {branch}"));

        match gettext::compile_branch(&tree, branch) {
            Ok(_) => {
                compiled += 1;
                pb.suspend(|| ui::print_compiled(branch));
            },
            Err(err) => {
                failed += 1;
                pb.suspend(|| ui::print_branch_failed(branch, &err));
            },
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    ui::print_build_summary(compiled, failed);
    Ok(())
}
