//! CLI command implementations.

mod add;
mod build;
mod common;
mod init;
mod merge;

pub use add::{AddArgs, run_add};
pub use build::{BuildArgs, run_build};
pub use common::{TreeArgs, report_dir};
pub use init::{InitArgs, run_init};
pub use merge::{MergeArgs, run_merge};
