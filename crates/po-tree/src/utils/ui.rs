// Styled terminal output shared by the commands: colored status lines over
// plain println!/eprintln!, indicatif progress bars for branch batches.

use crate::core::ToolError;
use colored::Colorize as _;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const PB_TICK: Duration = Duration::from_millis(100);

pub fn create_progress_bar(len: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(PB_TICK);
    pb
}

pub fn print_init_header() {
    println!("{}", "PO Tree Init".dimmed());
}

pub fn print_add_header() {
    println!("{}", "PO Tree Add".dimmed());
}

pub fn print_build_header() {
    println!("{}", "PO Tree Build".dimmed());
}

pub fn print_merge_header() {
    println!("{}", "PO Tree Merge".dimmed());
}

pub fn print_created_dir(path: &Path) {
    println!("{} {}", "Created".green(), path.display());
}

pub fn print_dir_exists(path: &Path) {
    println!(
        "{} {}",
        "Exists".dimmed(),
        format!("{} (already a directory)", path.display()).dimmed()
    );
}

pub fn print_extracting(source: &Path) {
    println!(
        "{} {}",
        "Extracting template from".dimmed(),
        source.display().to_string().green()
    );
}

pub fn print_tool_failed(err: &ToolError) {
    eprintln!("{} {}", format!("{} failed:", err.tool()).red(), err);
    if let ToolError::Failed { stderr, .. } = err
        && !stderr.trim().is_empty()
    {
        eprintln!("{}", stderr.trim_end().dimmed());
    }
}

pub fn print_seeded_catalog(locale: &str) {
    println!(
        "{} {}",
        "Seeded catalog for".dimmed(),
        locale.cyan()
    );
}

pub fn print_initialized(locale: &str) {
    println!("{} {}", "Initialized".green(), locale.cyan());
}

pub fn print_added(locale: &str) {
    println!("{} {}", "Added".green(), locale.cyan());
}

pub fn print_no_branches() {
    println!("{}", "No locale branches found in locales/".yellow());
}

pub fn print_compiled(branch: &str) {
    println!("{} {}", "Compiled".green(), branch.cyan());
}

pub fn print_merged(branch: &str) {
    println!("{} {}", "Merged".green(), branch.cyan());
}

pub fn print_branch_failed(branch: &str, err: &ToolError) {
    eprintln!("{} {}", "Skipping".red(), branch.white().bold());
    print_tool_failed(err);
}

pub fn print_build_summary(compiled: usize, failed: usize) {
    if failed == 0 {
        println!("{} {} branch(es) compiled", "Done:".green(), compiled);
    } else {
        println!(
            "{} {} branch(es) compiled, {} failed",
            "Done:".yellow(),
            compiled,
            failed
        );
    }
}

pub fn print_merge_summary(merged: usize, failed: usize) {
    if failed == 0 {
        println!("{} {} branch(es) merged", "Done:".green(), merged);
    } else {
        println!(
            "{} {} branch(es) merged, {} failed",
            "Done:".yellow(),
            merged,
            failed
        );
    }
}
