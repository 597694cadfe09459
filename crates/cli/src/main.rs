mod commands;
mod prefix;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging; stdout carries reference text, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("casenumber=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        print_error(&err);
        std::process::exit(1);
    }
}

/// Execute a command with automatic error context
macro_rules! run_command {
    ($name:expr, $cmd:expr) => {
        $cmd.await
            .with_context(|| format!("Command '{}' failed", $name))
    };
}

async fn run() -> anyhow::Result<()> {
    let cli = commands::Cli::parse();

    match cli.command {
        commands::Commands::Generate(args) => {
            run_command!("generate", commands::generate::run(args))
        }
        commands::Commands::Apply(args) => run_command!("apply", commands::apply::run(args)),
        commands::Commands::Expand(args) => run_command!("expand", commands::expand::run(args)),
        commands::Commands::Show(args) => run_command!("show", commands::show::run(args)),
        commands::Commands::Completions(args) => {
            commands::completions::run(args.shell);
            Ok(())
        }
    }
}

fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Print the error chain
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), cause);
        source = cause.source();
    }
}
