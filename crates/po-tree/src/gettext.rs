//! External gettext tool invocation.
//!
//! Extraction, compilation, and merging are opaque subprocesses. Output is
//! captured so failures can be reported with the tool's own stderr, and every
//! invocation is synchronous: one tool at a time, waited to completion.

use crate::core::ToolError;
use crate::tree::LocaleTree;
use std::path::Path;
use std::process::Command;

pub const XGETTEXT: &str = "xgettext";
pub const MSGFMT: &str = "msgfmt";
pub const MSGMERGE: &str = "msgmerge";

/// The gettext text domain. Fixed: every catalog in the tree is `base`.
const DOMAIN: &str = "base";

/// Captured output of a successful tool run.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

fn run_tool(tool: &'static str, cmd: &mut Command) -> Result<ToolOutput, ToolError> {
    let output = cmd
        .output()
        .map_err(|source| ToolError::Spawn { tool, source })?;

    if output.status.success() {
        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    } else {
        Err(ToolError::Failed {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Extract the message template from `source`, overwriting `locales/base.pot`.
pub fn extract_template(tree: &LocaleTree, source: &Path) -> Result<ToolOutput, ToolError> {
    let mut cmd = Command::new(XGETTEXT);
    cmd.arg("-d")
        .arg(DOMAIN)
        .arg("-o")
        .arg(tree.template_path())
        .arg(source);
    run_tool(XGETTEXT, &mut cmd)
}

/// Compile one branch's catalog to `base.mo`.
///
/// msgfmt takes the catalog path without its extension and resolves the `.po`
/// itself.
pub fn compile_branch(tree: &LocaleTree, branch: &str) -> Result<ToolOutput, ToolError> {
    let mut cmd = Command::new(MSGFMT);
    cmd.arg("-o")
        .arg(tree.compiled_path(branch))
        .arg(tree.catalog_stem(branch));
    run_tool(MSGFMT, &mut cmd)
}

/// Update one branch's catalog in place against the current template,
/// adding newly extracted keys while keeping existing translations.
pub fn merge_branch(tree: &LocaleTree, branch: &str) -> Result<ToolOutput, ToolError> {
    let mut cmd = Command::new(MSGMERGE);
    cmd.arg("--update")
        .arg(tree.catalog_path(branch))
        .arg(tree.template_path());
    run_tool(MSGMERGE, &mut cmd)
}
