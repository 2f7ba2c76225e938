use anyhow::Context;
use clap::Parser;

use modgraph::query::lmod::DEFAULT_INIT_SCRIPT;
use modgraph::query::{LmodCli, ModuleQuery};
use modgraph::render::{render, RenderTarget};
use modgraph::traverse::{expand_all, expand_module, TraversalOptions};

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(version)]
#[command(about = "Graph the dependencies of modules in an HPC environment", long_about = None)]
#[command(after_help = "\
Examples:
  modgraph                    Graph dependencies of all loaded modules as raw DOT text.
  modgraph gcc/11.2.0 -o .png Graph one module's dependency tree as a PNG image.
  modgraph -p -i              Print parsing details and include dependency-less modules.")]
struct Cli {
    /// Module to show dependencies for; when omitted, all modules matching
    /// the listing command are graphed
    module_name: Option<String>,

    /// lmod listing command used when no module is given (list, avail, spider)
    #[arg(short, long, default_value = "list")]
    command: String,

    /// Output file; its extension selects the format (dot, png, svg, raw).
    /// A bare extension like ".png" derives the file name from the module
    #[arg(short, long)]
    output: Option<String>,

    /// Print each module's dependency listing as it is discovered
    #[arg(short, long)]
    print: bool,

    /// Include modules without dependencies as graph nodes
    #[arg(short, long)]
    include: bool,

    /// lmod init script sourced before each module command
    #[arg(long, default_value = DEFAULT_INIT_SCRIPT)]
    init_script: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let query = LmodCli::new(&cli.init_script);
    let options = TraversalOptions {
        show_parsing: cli.print,
        include_independent: cli.include,
    };

    // A named module expands recursively; otherwise every module from the
    // listing command contributes its direct dependencies.
    let (graph, stem) = match &cli.module_name {
        Some(name) => (expand_module(&query, name, &options), name.clone()),
        None => {
            let modules = match query.list(&cli.command) {
                Ok(modules) => modules,
                Err(err) => {
                    // Render whatever we have (an empty graph) rather than
                    // aborting the run.
                    eprintln!("Error listing modules with '{}': {err}", cli.command);
                    Vec::new()
                }
            };
            (
                expand_all(&query, &modules, &cli.command, &options),
                cli.command.clone(),
            )
        }
    };

    let target = RenderTarget::resolve(cli.output.as_deref(), &stem);
    render(&graph, &target).context("failed to render dependency graph")?;

    Ok(())
}
