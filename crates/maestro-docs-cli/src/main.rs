mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "maestro-docs",
    about = "Maestro architecture guide — render it, serve it, or launch the documentation app",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from maestro-docs.yaml, package.json, or .git/)
    #[arg(long, global = true, env = "MAESTRO_DOCS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install web dependencies if missing, then run the development server
    Start,

    /// Serve the rendered guide over HTTP
    Serve {
        /// Port to listen on (0 = OS-assigned; default from config)
        #[arg(long)]
        port: Option<u16>,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Render the guide as a standalone HTML page
    Render {
        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the table of contents
    Toc,

    /// Print a single section by anchor
    Section { anchor: String },

    /// Check the launch environment (config, package manager, dependencies)
    Check,

    /// Write a default maestro-docs.yaml
    Init,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } | Commands::Start => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Start => cmd::start::run(&root),
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
        Commands::Render { output } => cmd::render::run(output.as_deref()),
        Commands::Toc => cmd::toc::run(cli.json),
        Commands::Section { anchor } => cmd::section::run(&anchor, cli.json),
        Commands::Check => cmd::check::run(&root, cli.json),
        Commands::Init => cmd::init::run(&root),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
