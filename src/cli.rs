use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "labrisk",
    version,
    about = "Structured extraction and risk scoring for lab reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Reference(ReferenceArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, num_args = 1.., required = true, help = "Report text file (repeatable)")]
    pub input: Vec<PathBuf>,

    #[arg(long, help = "Output root; each report writes <out>/<name>/")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false, help = "Write report.json")]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Write report.txt")]
    pub txt: bool,

    #[arg(long, help = "Classifier artifact (defaults to the bundled forest)")]
    pub model: Option<PathBuf>,

    #[arg(long, help = "Reference range TSV to overlay on built-in ranges")]
    pub ranges: Option<PathBuf>,

    #[arg(long, help = "Abbreviation TSV to overlay on the built-in dictionary")]
    pub abbreviations: Option<PathBuf>,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,
}

#[derive(Debug, Args)]
pub struct ReferenceArgs {
    #[command(subcommand)]
    pub command: ReferenceCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReferenceCommand {
    Show(ReferenceShowArgs),
}

#[derive(Debug, Args)]
pub struct ReferenceShowArgs {
    #[arg(long, help = "Reference range TSV to overlay on built-in ranges")]
    pub ranges: Option<PathBuf>,

    #[arg(long, help = "Abbreviation TSV to overlay on the built-in dictionary")]
    pub abbreviations: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Report text file")]
    pub input: PathBuf,
}
