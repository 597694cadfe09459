pub mod apply;
pub mod completions;
pub mod expand;
pub mod generate;
pub mod show;

use casenumber_core::{Clock, FixedClock, SystemClock};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "casenumber")]
#[command(author, version, about = "Timestamped case references for mail drafts.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a case reference without touching any draft
    Generate(GenerateArgs),

    /// Prefix a draft's subject with a case reference and print the reference text
    Apply(ApplyArgs),

    /// Expand [[SCRIPT=CaseNumber|...]] tokens in a draft's body
    Expand(ExpandArgs),

    /// Show a draft's subject and body
    Show(ShowArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Case prefix (defaults to the configured prefix, if any)
    pub prefix: Option<String>,

    /// Use this local time instead of now (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// Draft file (JSON, or YAML with a .yaml/.yml extension)
    pub draft: PathBuf,

    /// Template variables; the first one is the case prefix
    pub variables: Vec<String>,

    /// Use this local time instead of now (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub at: Option<String>,

    /// Also insert the reference text at the top of the draft body.
    /// This is a second write: if it fails, the subject stays stamped and the
    /// reference has already been printed
    #[arg(long)]
    pub insert_body: bool,
}

#[derive(Parser)]
pub struct ExpandArgs {
    /// Draft file (JSON, or YAML with a .yaml/.yml extension)
    pub draft: PathBuf,

    /// Use this local time instead of now (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Draft file (JSON, or YAML with a .yaml/.yml extension)
    pub draft: PathBuf,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Clock for a command: pinned to `--at` when given, otherwise the current
/// local time captured once at startup.
pub fn clock_for(at: Option<&str>) -> anyhow::Result<FixedClock> {
    match at {
        Some(value) => Ok(FixedClock::parse(value)?),
        None => Ok(FixedClock(SystemClock.now())),
    }
}
