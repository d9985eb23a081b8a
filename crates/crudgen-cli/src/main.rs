use crudgen_cli::{check, gen, print};

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate every repository in the manifest under `target`
    Gen {
        #[clap(short, long)]
        manifest: String,
        target: String,

        /// Leave the `@Generated` annotation off
        #[clap(long)]
        no_generated_annotation: bool,
    },

    /// Validate the manifest without generating anything
    Check {
        #[clap(short, long)]
        manifest: String,
    },

    /// Print the source of one generated class
    Print {
        #[clap(short, long)]
        manifest: String,
        class: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Gen {
            manifest,
            target,
            no_generated_annotation,
        } => gen::exec(&manifest, &target, no_generated_annotation),
        Command::Check { manifest } => check::exec(&manifest),
        Command::Print { manifest, class } => print::exec(&manifest, &class),
    }
}
