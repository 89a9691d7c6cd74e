//! CLI error types using miette for Rust-style diagnostics.

use miette::Diagnostic;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Error when a locale code is not exactly five characters.
#[derive(Debug, Diagnostic, Error)]
#[error("invalid locale code: '{locale}'")]
#[diagnostic(
    code(po_tree::locale::invalid),
    help("locale codes are 5 characters, e.g. 'fr_FR', 'en_US', 'es_ES'")
)]
pub struct InvalidLocaleError {
    /// The locale code that was rejected.
    pub locale: String,
}

/// Error when a source file does not have the expected `.py` suffix.
#[derive(Debug, Diagnostic, Error)]
#[error("invalid source file: {path}")]
#[diagnostic(
    code(po_tree::source::invalid),
    help("translatable strings are extracted from .py source files")
)]
pub struct InvalidSourceError {
    /// The path that was rejected.
    pub path: PathBuf,
}

/// Error when the template catalog is needed but does not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("template catalog not found: {path}")]
#[diagnostic(
    code(po_tree::template::not_found),
    help("run `po-tree init <locale> <source.py>` first to extract locales/base.pot")
)]
pub struct TemplateMissingError {
    /// Where the template was expected.
    pub path: PathBuf,
}

/// Error when a tree path exists but is not a directory.
#[derive(Debug, Diagnostic, Error)]
#[error("{path} exists but is not a directory")]
#[diagnostic(
    code(po_tree::tree::not_a_directory),
    help("remove or rename the conflicting file so the locale tree can be created")
)]
pub struct NotADirectoryError {
    /// The conflicting path.
    pub path: PathBuf,
}

/// Failure of an external gettext tool invocation.
///
/// These are recoverable by policy: callers print them and keep going, so a
/// missing tool or one broken branch never aborts a whole run.
#[derive(Debug, Diagnostic, Error)]
pub enum ToolError {
    #[error("failed to launch {tool}")]
    #[diagnostic(
        code(po_tree::tool::spawn),
        help("is gettext installed and {tool} on PATH?")
    )]
    Spawn {
        /// The executable that could not be started.
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}")]
    #[diagnostic(code(po_tree::tool::failed))]
    Failed {
        /// The executable that failed.
        tool: &'static str,
        /// The non-zero exit status.
        status: ExitStatus,
        /// Captured stderr from the tool.
        #[help]
        stderr: String,
    },
}

impl ToolError {
    /// The executable this error came from.
    pub fn tool(&self) -> &'static str {
        match self {
            ToolError::Spawn { tool, .. } | ToolError::Failed { tool, .. } => tool,
        }
    }
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidLocale(#[from] InvalidLocaleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidSource(#[from] InvalidSourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    TemplateMissing(#[from] TemplateMissingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    NotADirectory(#[from] NotADirectoryError),

    #[error("IO error: {0}")]
    #[diagnostic(code(po_tree::io))]
    Io(#[from] std::io::Error),
}
