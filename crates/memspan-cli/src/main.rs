//! memspan CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "memspan", version, about = "Memory-span training quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive session
    Run {
        /// Seed for reproducible quiz generation
        #[arg(long)]
        seed: Option<String>,

        /// Participant name, attached to exported reports
        #[arg(long)]
        name: Option<String>,

        /// Participant class, attached to exported reports
        #[arg(long)]
        class: Option<String>,

        /// Participant id, attached to exported reports
        #[arg(long)]
        id: Option<String>,

        /// Directory to write the JSON report into
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print a generated quiz with its answer key
    Preview {
        /// Seed for reproducible quiz generation
        #[arg(long)]
        seed: Option<String>,
    },

    /// Re-render a saved report
    Show {
        /// Report JSON file
        #[arg(long)]
        report: PathBuf,

        /// Output format: table, markdown, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("memspan=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            seed,
            name,
            class,
            id,
            output,
        } => commands::run::execute(seed, name, class, id, output),
        Commands::Preview { seed } => commands::preview::execute(seed),
        Commands::Show { report, format } => commands::show::execute(report, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
