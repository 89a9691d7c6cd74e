use clap::{Parser, Subcommand};
use miette::Result as MietteResult;
use po_tree::commands::{
    AddArgs, BuildArgs, InitArgs, MergeArgs, run_add, run_build, run_init, run_merge,
};

#[derive(Parser)]
#[command(name = "po-tree")]
#[command(about = "Manage a gettext translation tree (locales/<locale>/LC_MESSAGES)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the translation tree, extract the template, and seed the first branch
    Init(InitArgs),

    /// Add a new locale branch seeded from the current template
    Add(AddArgs),

    /// Compile every branch's catalog to a binary .mo
    Build(BuildArgs),

    /// Re-extract the template and fold new keys into every branch
    Merge(MergeArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .color(true)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => run_init(args),
        Commands::Add(args) => run_add(args),
        Commands::Build(args) => run_build(args),
        Commands::Merge(args) => run_merge(args),
    };

    result.map_err(miette::Report::new)
}
